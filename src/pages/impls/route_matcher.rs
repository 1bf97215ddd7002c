use crate::config::enums::configuration_error::ConfigurationError;
use crate::pages::enums::route_matcher::RouteMatcher;
use regex::Regex;
use std::fmt;

/// Bare rule strings starting with this marker are patterns.
pub const PATTERN_MARKER: char = '~';

impl fmt::Display for RouteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMatcher::Prefix(prefix) => write!(f, "{}", prefix),
            RouteMatcher::Pattern(pattern) => write!(f, "{}{}", PATTERN_MARKER, pattern.as_str()),
        }
    }
}

impl RouteMatcher {
    pub fn prefix(prefix: &str) -> RouteMatcher {
        RouteMatcher::Prefix(prefix.to_string())
    }

    pub fn pattern(pattern: &str) -> Result<RouteMatcher, ConfigurationError> {
        Regex::new(pattern)
            .map(RouteMatcher::Pattern)
            .map_err(|e| ConfigurationError::InvalidRule(format!("pattern '{}': {}", pattern, e)))
    }

    /// `~<regex>` is a pattern, anything else a literal prefix.
    pub fn parse(rule: &str) -> Result<RouteMatcher, ConfigurationError> {
        match rule.strip_prefix(PATTERN_MARKER) {
            Some(pattern) => Self::pattern(pattern),
            None if rule.is_empty() => Err(ConfigurationError::InvalidRule("empty rule".to_string())),
            None => Ok(Self::prefix(rule)),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            RouteMatcher::Prefix(prefix) => path.starts_with(prefix.as_str()),
            RouteMatcher::Pattern(pattern) => pattern.is_match(path),
        }
    }

    /// True when some path is matched by both `self` and `other`, as far as
    /// can be told without enumerating paths. Two patterns are never compared.
    pub fn overlaps(&self, other: &RouteMatcher) -> bool {
        match (self, other) {
            (RouteMatcher::Prefix(a), RouteMatcher::Prefix(b)) => a.starts_with(b.as_str()) || b.starts_with(a.as_str()),
            (RouteMatcher::Prefix(literal), RouteMatcher::Pattern(pattern))
            | (RouteMatcher::Pattern(pattern), RouteMatcher::Prefix(literal)) => pattern.is_match(literal),
            (RouteMatcher::Pattern(_), RouteMatcher::Pattern(_)) => false,
        }
    }
}
