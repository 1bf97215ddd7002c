//! Cache enumerations.

/// Backend engine selector (memory, redis, memcached, multi).
pub mod cache_engine;
