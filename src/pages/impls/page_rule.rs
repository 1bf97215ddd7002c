use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::page_rule_config::PageRuleConfig;
use crate::pages::enums::key_postfix::KeyPostfix;
use crate::pages::enums::route_matcher::RouteMatcher;
use crate::pages::structs::page_rule::PageRule;
use crate::render::structs::render_context::RenderContext;
use std::time::Duration;

impl PageRule {
    pub fn new(matcher: RouteMatcher) -> PageRule {
        PageRule {
            matcher,
            ttl: None,
            postfix: None,
        }
    }

    pub fn prefix(prefix: &str) -> PageRule {
        Self::new(RouteMatcher::prefix(prefix))
    }

    pub fn pattern(pattern: &str) -> Result<PageRule, ConfigurationError> {
        Ok(Self::new(RouteMatcher::pattern(pattern)?))
    }

    /// A zero ttl leaves the rule without an override.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl).filter(|ttl| !ttl.is_zero());
        self
    }

    pub fn with_postfix(mut self, postfix: &str) -> Self {
        self.postfix = Some(KeyPostfix::Literal(postfix.to_string()));
        self
    }

    pub fn with_postfix_fn<F>(mut self, postfix: F) -> Self
    where
        F: Fn(&RenderContext) -> String + Send + Sync + 'static,
    {
        self.postfix = Some(KeyPostfix::function(postfix));
        self
    }

    pub fn from_config(config: &PageRuleConfig) -> Result<PageRule, ConfigurationError> {
        match config {
            PageRuleConfig::Path(rule) => Ok(Self::new(RouteMatcher::parse(rule)?)),
            PageRuleConfig::Rule(table) => {
                let matcher = match (&table.url, &table.pattern) {
                    (Some(url), None) => RouteMatcher::parse(url)?,
                    (None, Some(pattern)) => RouteMatcher::pattern(pattern)?,
                    (Some(url), Some(pattern)) => {
                        return Err(ConfigurationError::InvalidRule(format!(
                            "rule sets both url '{}' and pattern '{}'",
                            url, pattern
                        )));
                    }
                    (None, None) => {
                        return Err(ConfigurationError::InvalidRule("rule needs a url or a pattern".to_string()));
                    }
                };
                if table.ttl == Some(0) {
                    return Err(ConfigurationError::InvalidRule(format!("rule {} has a zero ttl", matcher)));
                }
                Ok(PageRule {
                    matcher,
                    ttl: table.ttl.map(Duration::from_secs),
                    postfix: table.postfix.clone().map(KeyPostfix::Literal),
                })
            }
        }
    }

    pub fn matcher(&self) -> &RouteMatcher {
        &self.matcher
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }

    pub fn resolve_postfix(&self, context: &RenderContext) -> Option<String> {
        self.postfix.as_ref().map(|postfix| postfix.resolve(context))
    }
}
