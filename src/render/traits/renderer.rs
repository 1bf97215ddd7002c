use crate::render::enums::render_step::RenderStep;
use crate::render::structs::render_context::RenderContext;
use async_trait::async_trait;

/// An asynchronous page renderer.
///
/// Errors are the renderer's own; the cache layer passes them through untouched.
#[async_trait]
pub trait Renderer: Send + Sync {
    type Error: Send;

    async fn render_route(&self, route: &str, context: &RenderContext) -> Result<RenderStep, Self::Error>;
}
