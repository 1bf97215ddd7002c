use crate::render::structs::cache_decision::CacheDecision;
use crate::render::structs::render_result::RenderResult;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderStep {
    Rendered(RenderResult),
    Decided(CacheDecision),
}
