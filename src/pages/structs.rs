pub mod cache_key_builder;
pub mod page_rule;
pub mod page_rules;
