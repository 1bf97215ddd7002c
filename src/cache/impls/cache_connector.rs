use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_multi::CacheConnectorMulti;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::store_config::StoreConfig;
use async_trait::async_trait;
use log::info;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

impl fmt::Debug for CacheConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnector")
            .field("engine", &self.engine)
            .field("default_ttl", &self.default_ttl)
            .field("version_stored", &self.version_stored.load(Ordering::Relaxed))
            .finish()
    }
}

impl CacheConnector {
    /// Builds the handle for a store configuration.
    ///
    /// Nothing is contacted here; remote failures surface on the first operation.
    pub fn new(config: &StoreConfig) -> Result<CacheConnector, ConfigurationError> {
        config.validate()?;
        let backend = Self::build_backend(config)?;
        info!("[Cache] {} cache ready", config.engine);
        Ok(Self::from_backend(backend, config.engine, config.default_ttl()))
    }

    pub fn from_backend(
        backend: Arc<dyn CacheBackend>,
        engine: CacheEngine,
        default_ttl: Option<Duration>,
    ) -> CacheConnector {
        CacheConnector {
            backend,
            engine,
            default_ttl: default_ttl.filter(|ttl| !ttl.is_zero()),
            version_stored: AtomicBool::new(false),
        }
    }

    fn build_backend(config: &StoreConfig) -> Result<Arc<dyn CacheBackend>, ConfigurationError> {
        match config.engine {
            CacheEngine::memory => Ok(Arc::new(CacheConnectorMemory::new(config.max))),
            CacheEngine::redis => {
                let url = Self::connection_url(config)?;
                let redis = CacheConnectorRedis::new(&url)
                    .map_err(|e| ConfigurationError::InvalidStore(e.to_string()))?;
                if !config.configure.is_empty() {
                    redis.spawn_startup_commands(config.configure.clone());
                }
                Ok(Arc::new(redis))
            }
            CacheEngine::memcached => {
                let url = Self::connection_url(config)?;
                Ok(Arc::new(CacheConnectorMemcache::new(&url)))
            }
            CacheEngine::multi => {
                let members = config
                    .stores
                    .iter()
                    .map(Self::build_backend)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Arc::new(CacheConnectorMulti::new(members)))
            }
        }
    }

    fn connection_url(config: &StoreConfig) -> Result<String, ConfigurationError> {
        config.connection_url().ok_or_else(|| {
            ConfigurationError::InvalidStore(format!("{} store has no connection url", config.engine))
        })
    }

    pub fn engine(&self) -> CacheEngine {
        self.engine
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    pub fn backend(&self) -> &Arc<dyn CacheBackend> {
        &self.backend
    }

    pub fn version_stored(&self) -> bool {
        self.version_stored.load(Ordering::Acquire)
    }

    /// Claims the right to write the version sentinel; only the first caller gets `true`.
    pub(crate) fn claim_version_store(&self) -> bool {
        self.version_stored
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn release_version_store(&self) {
        self.version_stored.store(false, Ordering::Release);
    }
}

#[async_trait]
impl CacheBackend for CacheConnector {
    async fn ping(&self) -> Result<(), CacheError> {
        self.backend.ping().await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.backend.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.backend.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.delete(key).await
    }

    async fn reset_all(&self) -> Result<(), CacheError> {
        let result = self.backend.reset_all().await;
        self.release_version_store();
        result
    }

    async fn close(&self) -> Result<(), CacheError> {
        self.backend.close().await?;
        info!("[Cache] {} cache closed", self.engine);
        Ok(())
    }
}
