//! Configuration data structures.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Page rule table form (`url`/`pattern`, `ttl`, `postfix`).
pub mod page_rule_table;

/// Cache store configuration, nested for `multi`.
pub mod store_config;
