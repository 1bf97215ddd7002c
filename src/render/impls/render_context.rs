use crate::render::structs::render_context::RenderContext;
use crate::render::structs::request_cache_state::RequestCacheState;
use crate::render::structs::request_info::RequestInfo;

impl RenderContext {
    pub fn new(request: RequestInfo) -> RenderContext {
        RenderContext {
            request,
            ..Default::default()
        }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_spa(mut self, spa: bool) -> Self {
        self.spa = spa;
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// A copy of this context carrying `state`, as handed to the wrapped renderer.
    pub fn attach(&self, state: RequestCacheState, skip_cache_check: bool) -> RenderContext {
        RenderContext {
            skip_cache_check,
            cache_state: Some(state),
            ..self.clone()
        }
    }

    pub fn bypass(&self) -> RenderContext {
        RenderContext {
            skip_cache_check: true,
            ..self.clone()
        }
    }
}
