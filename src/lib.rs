//! Build Kubernetes client configuration from the environment.
//!
//! Configuration can come from an explicit API server URL, the in-cluster
//! service account, the local kubeconfig file, or a kubeconfig document
//! embedded in a [`Secret`](k8s_openapi::api::core::v1::Secret).

pub mod config;
pub mod defaults;
pub mod error;
pub mod source;

pub use config::*;
pub use error::ConfigError;
pub use source::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The user agent reported to the API server by clients configured through
/// [`build_config`].
pub const USER_AGENT: &str = concat!("cluster-config/", env!("CARGO_PKG_VERSION"));
