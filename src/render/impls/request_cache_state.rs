use crate::render::structs::request_cache_state::RequestCacheState;
use std::time::Duration;

impl RequestCacheState {
    pub fn new(key: String, ttl: Duration) -> RequestCacheState {
        RequestCacheState {
            key,
            ttl,
            postfix: None,
            should_cache: true,
        }
    }
}
