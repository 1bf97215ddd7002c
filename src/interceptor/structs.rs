/// Route-middleware side of render-time caching decisions.
pub mod cache_middleware;

/// The interceptor wrapping the renderer.
pub mod render_interceptor;
