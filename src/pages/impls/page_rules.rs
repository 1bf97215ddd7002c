use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::page_rule_config::PageRuleConfig;
use crate::pages::structs::page_rule::PageRule;
use crate::pages::structs::page_rules::PageRules;

impl PageRules {
    pub fn new(rules: Vec<PageRule>) -> PageRules {
        PageRules { rules }
    }

    pub fn from_config(pages: &[PageRuleConfig]) -> Result<PageRules, ConfigurationError> {
        let rules = pages
            .iter()
            .map(PageRule::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PageRules { rules })
    }

    pub fn push(&mut self, rule: PageRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageRule> {
        self.rules.iter()
    }

    /// First rule in declared order matching `path`.
    pub fn find(&self, path: &str) -> Option<&PageRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Index pairs `(earlier, later)` of rules that can match the same path.
    /// For every such pair the earlier rule wins.
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut overlaps = Vec::new();
        for (earlier, first) in self.rules.iter().enumerate() {
            for (offset, second) in self.rules[earlier + 1..].iter().enumerate() {
                if first.matcher.overlaps(&second.matcher) {
                    overlaps.push((earlier, earlier + 1 + offset));
                }
            }
        }
        overlaps
    }
}
