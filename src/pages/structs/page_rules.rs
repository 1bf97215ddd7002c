use crate::pages::structs::page_rule::PageRule;

#[derive(Debug, Clone, Default)]
pub struct PageRules {
    pub(crate) rules: Vec<PageRule>,
}
