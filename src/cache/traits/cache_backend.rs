use crate::cache::errors::CacheError;
use async_trait::async_trait;
use std::time::Duration;

/// Uniform awaitable contract over every cache backend.
///
/// `get` answers `Ok(None)` for a missing key; `Err` is reserved for I/O
/// and protocol failures. A `ttl` of `None` or zero on `set` stores without
/// expiry; any other ttl is rounded up to what the backend can express.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn ping(&self) -> Result<(), CacheError>;

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    async fn reset_all(&self) -> Result<(), CacheError>;

    async fn close(&self) -> Result<(), CacheError>;
}
