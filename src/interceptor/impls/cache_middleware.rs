use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::interceptor::structs::cache_middleware::CacheMiddleware;
use crate::pages::structs::page_rules::PageRules;
use crate::render::structs::cache_decision::CacheDecision;
use crate::render::structs::render_context::RenderContext;
use log::debug;

impl CacheMiddleware {
    pub fn new(rules: PageRules, ssr: bool) -> CacheMiddleware {
        CacheMiddleware { rules, ssr }
    }

    pub fn from_config(config: &Configuration) -> Result<CacheMiddleware, ConfigurationError> {
        Ok(Self::new(config.page_rules()?, config.ssr))
    }

    /// Called by the renderer at the start of a render. A returned decision
    /// means the renderer should stop and answer `RenderStep::Decided`.
    pub fn check(&self, route: &str, context: &RenderContext) -> Option<CacheDecision> {
        if context.skip_cache_check {
            return None;
        }
        if !self.ssr {
            debug!("[PageCache] {} not server-side rendered, skipping", route);
            return None;
        }
        let rule = self.rules.find(route)?;
        debug!("[PageCache] {} is going to be cached", route);
        Some(CacheDecision {
            should_cache: true,
            ttl: rule.ttl(),
            postfix: rule.resolve_postfix(context),
        })
    }
}
