#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheKeyBuilder {
    pub(crate) prefix: Option<String>,
    pub(crate) use_host_prefix: bool,
}
