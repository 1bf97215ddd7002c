use crate::cache::traits::cache_backend::CacheBackend;
use std::sync::Arc;

/// Members are consulted in declared order for reads; writes fan out to all.
pub struct CacheConnectorMulti {
    pub(crate) members: Vec<Arc<dyn CacheBackend>>,
}
