#![allow(dead_code)]
use async_trait::async_trait;
use page_cache::cache::structs::cache_connector::CacheConnector;
use page_cache::config::enums::page_rule_config::PageRuleConfig;
use page_cache::config::structs::configuration::Configuration;
use page_cache::config::structs::page_rule_table::PageRuleTable;
use page_cache::config::structs::store_config::StoreConfig;
use page_cache::interceptor::structs::cache_middleware::CacheMiddleware;
use page_cache::render::enums::render_step::RenderStep;
use page_cache::render::structs::render_context::RenderContext;
use page_cache::render::structs::render_result::RenderResult;
use page_cache::render::traits::renderer::Renderer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub type TestCache = Arc<CacheConnector>;

/// Renders `<html>{route}</html>` and counts its calls.
pub struct CountingRenderer {
    pub calls: AtomicUsize,
    pub middleware: Option<CacheMiddleware>,
}

impl CountingRenderer {
    pub fn new() -> CountingRenderer {
        CountingRenderer {
            calls: AtomicUsize::new(0),
            middleware: None,
        }
    }

    pub fn with_middleware(middleware: CacheMiddleware) -> CountingRenderer {
        CountingRenderer {
            calls: AtomicUsize::new(0),
            middleware: Some(middleware),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Renderer for CountingRenderer {
    type Error = std::io::Error;

    async fn render_route(&self, route: &str, context: &RenderContext) -> Result<RenderStep, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(middleware) = &self.middleware
            && let Some(decision) = middleware.check(route, context) {
                return Ok(RenderStep::Decided(decision));
            }
        if route.starts_with("/broken") {
            return Err(std::io::Error::other(format!("no template for {}", route)));
        }
        Ok(RenderResult::new(format!("<html>{}</html>", route)).into())
    }
}

pub fn page(url: &str, ttl: Option<u64>) -> PageRuleConfig {
    PageRuleConfig::Rule(PageRuleTable {
        url: Some(url.to_string()),
        ttl,
        ..Default::default()
    })
}

pub fn create_test_config(pages: Vec<PageRuleConfig>) -> Configuration {
    let mut config = Configuration::init();
    config.log_level = "off".to_string();
    config.pages = pages;
    config
}

pub fn create_test_cache(store: &StoreConfig) -> TestCache {
    Arc::new(CacheConnector::new(store).unwrap())
}
