use parking_lot::Mutex;
use std::sync::Arc;

pub struct CacheConnectorMemcache {
    pub(crate) client: Arc<Mutex<Option<memcache::Client>>>,
    pub(crate) url: String,
}
