//! Version-epoch invalidation.
//!
//! The deployed application version is kept in the cache under the sentinel
//! key `appVersion`, without expiry. At startup the guard compares it with
//! the configured version and flushes the whole cache when they differ. The
//! flush is not awaited by the caller. A failed read never flushes.

pub mod enums;
pub mod structs;
pub mod impls;
