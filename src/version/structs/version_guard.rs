use crate::cache::structs::cache_connector::CacheConnector;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct VersionGuard {
    pub(crate) cache: Arc<CacheConnector>,
    pub(crate) version: Option<String>,
}
