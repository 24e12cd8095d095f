use cluster_config::{resolve_config_from_secret, ConfigError};
use k8s_openapi::{
    api::core::v1::Secret, apimachinery::pkg::apis::meta::v1::ObjectMeta, ByteString,
};

const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
  - name: testing
    cluster:
      server: https://1.2.3.4:6443
      insecure-skip-tls-verify: true
users:
  - name: tester
    user:
      token: 0123456789abcdef
contexts:
  - name: testing
    context:
      cluster: testing
      user: tester
      namespace: integration
current-context: testing
"#;

fn secret(name: &str, entries: Vec<(&str, &[u8])>) -> Secret {
    let data = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), ByteString(v.to_vec())))
        .collect();

    Secret {
        metadata: ObjectMeta {
            name: Some(name.into()),
            ..Default::default()
        },
        data: Some(data),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_invalid_kubeconfig_key() {
    let secret = secret("TestSecret", vec![]);

    let result = resolve_config_from_secret(&secret, "AnyKey").await;

    match result {
        Ok(_) => panic!("expected an error"),
        Err(err) => {
            assert!(matches!(err, ConfigError::InvalidKubeconfigKey { .. }));
            let text = err.to_string();
            assert!(text.contains("AnyKey"), "missing key in: {text}");
            assert!(text.contains("TestSecret"), "missing secret name in: {text}");
        }
    }
}

#[tokio::test]
async fn test_valid_kubeconfig() {
    let secret = secret("cluster-credentials", vec![("kubeconfig", KUBECONFIG.as_bytes())]);

    let config = resolve_config_from_secret(&secret, "kubeconfig")
        .await
        .unwrap();

    assert_eq!(
        config.kube.cluster_url,
        "https://1.2.3.4:6443".parse::<http::Uri>().unwrap()
    );
    assert_eq!(config.kube.default_namespace, "integration");
    // the secret path does not stamp a user agent
    assert_eq!(config.user_agent, None);
}

#[tokio::test]
async fn test_malformed_kubeconfig() {
    let secret = secret("cluster-credentials", vec![("kubeconfig", b"clusters: [" as &[u8])]);

    let result = resolve_config_from_secret(&secret, "kubeconfig").await;
    assert!(matches!(result, Err(ConfigError::ParseKubeconfig(_))));
}

#[tokio::test]
async fn test_binary_kubeconfig() {
    let secret = secret("cluster-credentials", vec![("kubeconfig", &[0xff, 0xfe, 0x00][..])]);

    let result = resolve_config_from_secret(&secret, "kubeconfig").await;
    assert!(matches!(result, Err(ConfigError::DecodeKubeconfig(_))));
}

#[tokio::test]
async fn test_no_current_context() {
    let kubeconfig = KUBECONFIG.replace("current-context: testing", "");
    let secret = secret("cluster-credentials", vec![("kubeconfig", kubeconfig.as_bytes())]);

    let result = resolve_config_from_secret(&secret, "kubeconfig").await;
    assert!(matches!(result, Err(ConfigError::ResolveKubeconfig(_))));
}
