//! Cache backend trait definitions.

/// Uniform asynchronous contract every backend implements.
pub mod cache_backend;
