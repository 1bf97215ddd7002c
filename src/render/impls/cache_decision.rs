use crate::render::structs::cache_decision::CacheDecision;
use std::time::Duration;

impl CacheDecision {
    pub fn cache() -> CacheDecision {
        CacheDecision {
            should_cache: true,
            ttl: None,
            postfix: None,
        }
    }

    pub fn skip() -> CacheDecision {
        CacheDecision {
            should_cache: false,
            ttl: None,
            postfix: None,
        }
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    /// A zero ttl keeps the rule's ttl.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl).filter(|ttl| !ttl.is_zero());
        self
    }
}
