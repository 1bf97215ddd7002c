//! Configuration enumerations.

pub mod configuration_error;

/// When the interceptor learns the final cache key.
pub mod intercept_mode;

/// A page rule as written in the configuration file.
pub mod page_rule_config;
