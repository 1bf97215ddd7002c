use crate::render::structs::render_context::RenderContext;
use std::sync::Arc;

pub type PostfixFn = Arc<dyn Fn(&RenderContext) -> String + Send + Sync>;

#[derive(Clone)]
pub enum KeyPostfix {
    Literal(String),
    Function(PostfixFn),
}
