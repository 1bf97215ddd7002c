//! Configuration management module.
//!
//! Loads and validates the page cache configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "info"
//! prefix = "shop"
//! use_host_prefix = false
//! version = "1.4.2"
//! mode = "precomputed"
//! pages = ["/catalog", "~^/product/[0-9]+$"]
//!
//! [store]
//! type = "redis"
//! host = "127.0.0.1"
//! port = 6379
//! ttl = 600
//! configure = [["maxmemory-policy", "allkeys-lru"]]
//! ```
//!
//! Page rules may also be tables with `url` or `pattern`, an optional `ttl`
//! in seconds and an optional literal `postfix`.

/// Configuration enumerations (errors, interception mode, page rule entries).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

mod tests;
