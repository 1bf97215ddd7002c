//! Implementation blocks for configuration types.

pub mod configuration;
pub mod configuration_error;
pub mod intercept_mode;
pub mod store_config;
