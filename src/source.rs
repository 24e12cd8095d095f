use serde::Deserialize;

use crate::{build_config_from_secret, config::ClientConfig, defaults, error::ConfigError};

/// Load a `Deserialize` settings structure from environment variables, using
/// `__` as the nesting separator.
pub trait ConfigFromEnv<'de>: Sized + Deserialize<'de> {
    fn from_env() -> Result<Self, config::ConfigError> {
        Self::from(config::Environment::default())
    }

    fn from_env_prefix<S: AsRef<str>>(prefix: S) -> Result<Self, config::ConfigError> {
        Self::from(config::Environment::with_prefix(prefix.as_ref()))
    }

    fn from(env: config::Environment) -> Result<Self, config::ConfigError>;
}

impl<'de, T: Deserialize<'de> + Sized> ConfigFromEnv<'de> for T {
    fn from(env: config::Environment) -> Result<T, config::ConfigError> {
        let env = env.try_parsing(true).separator("__");

        config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

/// Reference to a secret holding an embedded kubeconfig document.
///
/// When no namespace is set, the namespace of the running pod is used, else
/// `default`.
#[derive(Clone, Debug, Deserialize)]
pub struct KubeconfigSecretSource {
    #[serde(default)]
    pub namespace: Option<String>,

    pub name: String,

    #[serde(default = "defaults::kubeconfig_key")]
    pub key: String,
}

impl KubeconfigSecretSource {
    /// Fetch the referenced secret and resolve the embedded kubeconfig.
    pub async fn load(&self) -> Result<ClientConfig, ConfigError> {
        let namespace = self
            .namespace
            .clone()
            .or_else(crate::namespace)
            .unwrap_or_else(defaults::namespace);

        build_config_from_secret(&namespace, &self.name, &self.key).await
    }
}
