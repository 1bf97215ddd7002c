//! Render interception.
//!
//! `RenderInterceptor` wraps a `Renderer` and is itself a `Renderer` with the
//! same error type, so it can stand in for the wrapped one. Per request it
//! walks this state machine:
//!
//! ```text
//! START -> ROUTE_CHECK -> NOT_CACHEABLE                    (render directly)
//!                      -> CACHE_LOOKUP -> HIT              (cached artifact, renderer not called)
//!                                      -> MISS -> RENDER -> STORE_AND_RETURN
//!                                                        -> RETURN_WITHOUT_STORE (error/redirect)
//! ```
//!
//! In `precomputed` mode the key is known from the route and the lookup
//! happens before the renderer runs. In `render_time` mode the renderer is
//! called first and may stop early with `RenderStep::Decided` (see
//! `CacheMiddleware`); the interceptor then finishes the key, looks it up
//! and on a miss renders again with `skip_cache_check` set.
//!
//! Stores are fire-and-forget. Concurrent cold requests for the same key
//! all render and all store; the last write wins.

/// Closure types for key and cacheability overrides.
pub mod types;

/// Interceptor and render-time middleware structures.
pub mod structs;

/// Implementation blocks for the interceptor and middleware.
pub mod impls;
