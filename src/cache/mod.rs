//! Cache backends behind one asynchronous contract.
//!
//! # Supported Backends
//!
//! - **memory**: in-process map with ttl expiry and an optional entry bound
//! - **redis**: distributed key-value store, lazily connected, no background reconnect
//! - **memcached**: memcache server, lazily connected
//! - **multi**: ordered composite; reads return the first member hit,
//!   writes and resets fan out to every member without waiting
//!
//! # Architecture
//!
//! - `CacheBackend` trait defines the uniform `get`/`set`/`delete`/`reset_all` contract
//! - Each backend has its own connector implementation
//! - `CacheConnector` is the handle the rest of the crate holds; it is built
//!   once from a `StoreConfig` through a closed match on `CacheEngine`
//!
//! # Example
//!
//! ```rust,ignore
//! use page_cache::cache::structs::cache_connector::CacheConnector;
//! use page_cache::cache::traits::cache_backend::CacheBackend;
//!
//! let cache = CacheConnector::new(&config.store)?;
//! cache.set("page:home", &artifact, Some(Duration::from_secs(60))).await?;
//! ```

/// Cache engine enumeration (memory, redis, memcached, multi).
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache connectors.
pub mod impls;

/// Data structures for cache connections.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
