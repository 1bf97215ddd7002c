use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCacheState {
    pub key: String,
    pub ttl: Duration,
    pub postfix: Option<String>,
    pub should_cache: bool,
}
