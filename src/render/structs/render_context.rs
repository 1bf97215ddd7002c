use crate::render::structs::request_cache_state::RequestCacheState;
use crate::render::structs::request_info::RequestInfo;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    pub request: RequestInfo,
    /// Single-page-app requests are never cached.
    pub spa: bool,
    /// Set by the interceptor when the renderer must render instead of deciding.
    pub skip_cache_check: bool,
    /// Free-form values postfix functions may read (device class, locale, ...).
    pub params: BTreeMap<String, String>,
    pub cache_state: Option<RequestCacheState>,
}
