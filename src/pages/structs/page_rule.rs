use crate::pages::enums::key_postfix::KeyPostfix;
use crate::pages::enums::route_matcher::RouteMatcher;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PageRule {
    pub(crate) matcher: RouteMatcher,
    pub(crate) ttl: Option<Duration>,
    pub(crate) postfix: Option<KeyPostfix>,
}
