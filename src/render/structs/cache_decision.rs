use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDecision {
    pub should_cache: bool,
    pub ttl: Option<Duration>,
    pub postfix: Option<String>,
}
