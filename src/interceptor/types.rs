use crate::render::structs::render_context::RenderContext;
use std::sync::Arc;
use std::time::Duration;

/// Custom key derivation; `None` falls back to the default key builder.
pub type KeyFn = Arc<dyn Fn(&str, &RenderContext) -> Option<String> + Send + Sync>;

/// Replaces the rule-based cacheability check.
pub type CacheableFn = Arc<dyn Fn(&str, &RenderContext) -> bool + Send + Sync>;

/// Used when neither the rule nor the store configures a ttl.
pub const FALLBACK_TTL: Duration = Duration::from_secs(600);
