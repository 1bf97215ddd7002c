/// Literal or function postfix appended to a rule's keys.
pub mod key_postfix;

/// Literal-prefix or pattern route matcher.
pub mod route_matcher;
