use crate::pages::structs::page_rules::PageRules;

#[derive(Debug, Clone)]
pub struct CacheMiddleware {
    pub(crate) rules: PageRules,
    pub(crate) ssr: bool,
}
