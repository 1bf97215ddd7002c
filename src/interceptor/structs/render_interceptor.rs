use crate::cache::structs::cache_connector::CacheConnector;
use crate::config::enums::intercept_mode::InterceptMode;
use crate::interceptor::types::{CacheableFn, KeyFn};
use crate::pages::structs::cache_key_builder::CacheKeyBuilder;
use crate::pages::structs::page_rules::PageRules;
use crate::version::structs::version_guard::VersionGuard;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::task::JoinHandle;

pub struct RenderInterceptor<R> {
    pub(crate) renderer: R,
    pub(crate) cache: Arc<CacheConnector>,
    pub(crate) rules: PageRules,
    pub(crate) keys: CacheKeyBuilder,
    pub(crate) version_guard: VersionGuard,
    pub(crate) mode: InterceptMode,
    pub(crate) key_fn: Option<KeyFn>,
    pub(crate) cacheable_fn: Option<CacheableFn>,
    pub(crate) started: AtomicBool,
    pub(crate) pending: Mutex<Vec<JoinHandle<()>>>,
}
