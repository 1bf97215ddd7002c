use regex::Regex;

#[derive(Debug, Clone)]
pub enum RouteMatcher {
    Prefix(String),
    Pattern(Regex),
}
