pub mod cache_key_builder;
pub mod key_postfix;
pub mod page_rule;
pub mod page_rules;
pub mod route_matcher;
