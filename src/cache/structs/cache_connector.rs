use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::traits::cache_backend::CacheBackend;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// The process-wide cache handle.
///
/// Built once at startup and injected into the interceptor and version guard.
/// `version_stored` flips to true once the version sentinel has been persisted.
pub struct CacheConnector {
    pub(crate) backend: Arc<dyn CacheBackend>,
    pub(crate) engine: CacheEngine,
    pub(crate) default_ttl: Option<Duration>,
    pub(crate) version_stored: AtomicBool,
}
