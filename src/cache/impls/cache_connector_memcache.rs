use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Memcached reads larger expirations as unix timestamps.
pub const MAX_RELATIVE_EXPIRATION: u64 = 2_592_000;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .field("url", &self.url)
            .finish()
    }
}

impl CacheConnectorMemcache {
    pub fn new(url: &str) -> Self {
        Self {
            client: Arc::new(Mutex::new(None)),
            url: url.to_string(),
        }
    }

    /// Memcache expiration for `ttl`, rounded up to whole seconds. Lifetimes
    /// past the relative limit are sent as an absolute unix time from `now`.
    pub(crate) fn expiration(ttl: Option<Duration>, now: i64) -> u32 {
        let Some(ttl) = ttl.filter(|ttl| !ttl.is_zero()) else {
            return 0;
        };
        let mut seconds = ttl.as_secs();
        if ttl.subsec_nanos() > 0 {
            seconds = seconds.saturating_add(1);
        }
        if seconds <= MAX_RELATIVE_EXPIRATION {
            return seconds as u32;
        }
        let absolute = u64::try_from(now).unwrap_or(0).saturating_add(seconds);
        u32::try_from(absolute).unwrap_or(u32::MAX)
    }

    // The memcache client is blocking, so every call runs on the blocking pool.
    async fn with_client<T, F>(&self, operation: F) -> Result<T, CacheError>
    where
        T: Send + 'static,
        F: FnOnce(&memcache::Client) -> Result<T, memcache::MemcacheError> + Send + 'static,
    {
        let client = self.client.clone();
        let url = self.url.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = client.lock();
            if guard.is_none() {
                let connected = memcache::connect(url.as_str())
                    .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
                info!("[Memcache] Connected to {}", url);
                *guard = Some(connected);
            }
            match guard.as_ref() {
                Some(connected) => operation(connected).map_err(CacheError::MemcacheError),
                None => Err(CacheError::ConnectionError("Memcache not connected".to_string())),
            }
        })
        .await
        .map_err(|e| CacheError::OperationError(format!("Memcache task failed: {}", e)))?
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemcache {
    async fn ping(&self) -> Result<(), CacheError> {
        self.with_client(|client| client.version().map(|_| ())).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let key = key.to_string();
        self.with_client(move |client| client.get::<String>(&key)).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let owned_key = key.to_string();
        let value = value.to_string();
        let expiration = Self::expiration(ttl, chrono::Utc::now().timestamp());
        self.with_client(move |client| client.set(&owned_key, value.as_str(), expiration))
            .await?;
        debug!("[Memcache] Set {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let owned_key = key.to_string();
        self.with_client(move |client| client.delete(&owned_key).map(|_| ()))
            .await?;
        debug!("[Memcache] Deleted {}", key);
        Ok(())
    }

    async fn reset_all(&self) -> Result<(), CacheError> {
        self.with_client(|client| client.flush()).await?;
        info!("[Memcache] Flushed {}", self.url);
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        if self.client.lock().take().is_some() {
            info!("[Memcache] Closed connection to {}", self.url);
        }
        Ok(())
    }
}
