//! Implementation blocks for cache connectors.

pub mod cache_connector;
pub mod cache_connector_memcache;
pub mod cache_connector_memory;
pub mod cache_connector_multi;
pub mod cache_connector_redis;
pub mod cache_engine;
