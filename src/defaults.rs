#[inline]
pub fn kubeconfig_key() -> String {
    "kubeconfig".into()
}

#[inline]
pub fn namespace() -> String {
    "default".into()
}
