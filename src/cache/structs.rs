//! Cache connector structures.

/// Cache handle shared by the interceptor and the version guard.
pub mod cache_connector;

/// In-process map backend.
pub mod cache_connector_memory;

/// Redis backend.
pub mod cache_connector_redis;

/// Memcache backend.
pub mod cache_connector_memcache;

/// Ordered composite of other backends.
pub mod cache_connector_multi;
