/// Caching decision taken by the renderer while rendering.
pub mod cache_decision;

/// Context handed to every render call.
pub mod render_context;

/// The rendered artifact that gets cached.
pub mod render_result;

/// Caching state attached to a request before the renderer runs.
pub mod request_cache_state;

/// Incoming request data used for host-prefixed keys.
pub mod request_info;
