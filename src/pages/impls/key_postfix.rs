use crate::pages::enums::key_postfix::KeyPostfix;
use crate::render::structs::render_context::RenderContext;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for KeyPostfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPostfix::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            KeyPostfix::Function(_) => f.write_str("Function(<fn>)"),
        }
    }
}

impl KeyPostfix {
    pub fn function<F>(postfix: F) -> KeyPostfix
    where
        F: Fn(&RenderContext) -> String + Send + Sync + 'static,
    {
        KeyPostfix::Function(Arc::new(postfix))
    }

    pub fn resolve(&self, context: &RenderContext) -> String {
        match self {
            KeyPostfix::Literal(value) => value.clone(),
            KeyPostfix::Function(postfix) => postfix(context),
        }
    }
}
