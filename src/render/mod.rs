//! The renderer contract the cache sits in front of.
//!
//! The page renderer itself is external. This module only fixes the shape of
//! the call (`Renderer::render_route`), the per-request context passed into
//! it and the artifact it produces.
//!
//! A render step ends in one of two ways:
//! - `RenderStep::Rendered` carries a finished `RenderResult`
//! - `RenderStep::Decided` carries a `CacheDecision` made mid-render; the
//!   renderer stops early and hands control back to the interceptor, which
//!   either serves a cached artifact or calls the renderer again with
//!   `skip_cache_check` set

/// Outcome of one renderer call.
pub mod enums;

/// Render artifacts, request context and per-request cache state.
pub mod structs;

/// Implementation blocks for render types.
pub mod impls;

/// The `Renderer` trait.
pub mod traits;
