use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API server URL '{url}': {source}")]
    InvalidApiServerUrl {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("error loading cluster config: {0}")]
    LoadKubeconfig(#[source] kube::config::KubeconfigError),

    #[error("error loading cluster client config: {0}")]
    ResolveKubeconfig(#[source] kube::config::KubeconfigError),

    #[error("in-cluster configuration unavailable: {0}")]
    InCluster(#[source] kube::config::InClusterError),

    #[error("failed to create Kubernetes client: {0}")]
    CreateClient(#[source] kube::Error),

    #[error("secret '{name}' is not available in namespace '{namespace}': {source}")]
    GetSecret {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("invalid kubeconfig key '{key}' for secret '{secret}'")]
    InvalidKubeconfigKey { key: String, secret: String },

    #[error("kubeconfig data is not valid UTF-8: {0}")]
    DecodeKubeconfig(#[source] std::str::Utf8Error),

    #[error("failed to parse kubeconfig: {0}")]
    ParseKubeconfig(#[source] kube::config::KubeconfigError),
}
