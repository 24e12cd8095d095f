use k8s_openapi::api::core::v1::Secret;
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client,
};

use crate::{error::ConfigError, USER_AGENT};

/// Resolved connection settings for talking to a Kubernetes API server.
///
/// Wraps the underlying [`kube::Config`] together with the user agent stamped
/// on it, when one was. Configurations built by [`build_config`] carry
/// [`USER_AGENT`]; configurations resolved out of a secret carry none.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub kube: kube::Config,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Construct an API client from this configuration.
    ///
    /// Note that [`kube::Config`] has no user agent field, so the stamp in
    /// [`user_agent`](Self::user_agent) is not applied to the client's
    /// requests. Callers that need it on the wire must inject the header in
    /// their own transport layer.
    pub fn into_client(self) -> Result<Client, ConfigError> {
        Client::try_from(self.kube).map_err(ConfigError::CreateClient)
    }
}

/// Build a client configuration for communicating with the API server.
///
/// If `api_server_host` is non-empty, the configuration points at that URL
/// without any authentication. Otherwise the in-cluster configuration is
/// loaded, and failing that, the user's local kubeconfig (honoring the
/// `KUBECONFIG` environment variable, else the default location) is resolved
/// with its current context.
pub async fn build_config(api_server_host: &str) -> Result<ClientConfig, ConfigError> {
    let kube = if !api_server_host.is_empty() {
        let url = api_server_host
            .parse::<http::Uri>()
            .map_err(|err| ConfigError::InvalidApiServerUrl {
                url: api_server_host.into(),
                source: err,
            })?;
        kube::Config::new(url)
    } else {
        match kube::Config::incluster() {
            Ok(config) => config,
            Err(err) => {
                log::debug!("Not running in-cluster ({err}), falling back to local kubeconfig");
                let kubeconfig = Kubeconfig::read().map_err(ConfigError::LoadKubeconfig)?;
                kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                    .await
                    .map_err(ConfigError::ResolveKubeconfig)?
            }
        }
    };

    Ok(ClientConfig {
        kube,
        user_agent: Some(USER_AGENT.into()),
    })
}

/// Build a client configuration out of a kubeconfig document stored in a
/// secret within the cluster.
///
/// This requires running inside a cluster. There is no fallback to local
/// files.
pub async fn build_config_from_secret(
    namespace: &str,
    secret_name: &str,
    kubeconfig_key: &str,
) -> Result<ClientConfig, ConfigError> {
    let config = kube::Config::incluster().map_err(|err| {
        log::error!("An error occurred while getting the in-cluster config: {err}");
        ConfigError::InCluster(err)
    })?;

    let client = Client::try_from(config).map_err(|err| {
        log::error!("An error occurred while creating a client out of the in-cluster config: {err}");
        ConfigError::CreateClient(err)
    })?;

    let secrets: Api<Secret> = Api::namespaced(client, namespace);
    let secret = secrets.get(secret_name).await.map_err(|err| {
        log::error!("Secret with name {secret_name} is not available in namespace {namespace}");
        ConfigError::GetSecret {
            namespace: namespace.into(),
            name: secret_name.into(),
            source: err,
        }
    })?;

    resolve_config_from_secret(&secret, kubeconfig_key).await
}

/// Resolve a client configuration from the kubeconfig document stored under
/// `kubeconfig_key` in the secret's data.
///
/// The document is resolved with its current context and no overrides. The
/// result carries no user agent.
pub async fn resolve_config_from_secret(
    secret: &Secret,
    kubeconfig_key: &str,
) -> Result<ClientConfig, ConfigError> {
    let data = secret
        .data
        .as_ref()
        .and_then(|data| data.get(kubeconfig_key))
        .ok_or_else(|| ConfigError::InvalidKubeconfigKey {
            key: kubeconfig_key.into(),
            secret: secret.metadata.name.clone().unwrap_or_default(),
        })?;

    let content = std::str::from_utf8(&data.0).map_err(ConfigError::DecodeKubeconfig)?;
    let kubeconfig = Kubeconfig::from_yaml(content).map_err(ConfigError::ParseKubeconfig)?;

    let kube = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(ConfigError::ResolveKubeconfig)?;

    Ok(ClientConfig {
        kube,
        user_agent: None,
    })
}

/// The effective namespace of the running process.
///
/// An explicit `NAMESPACE` environment variable wins over the service
/// account namespace of the pod. Outside a cluster, with no variable set,
/// there is none.
pub fn namespace() -> Option<String> {
    match std::env::var("NAMESPACE") {
        Ok(namespace) => Some(namespace),
        Err(_) => kube::Config::incluster()
            .ok()
            .map(|config| config.default_namespace),
    }
}
