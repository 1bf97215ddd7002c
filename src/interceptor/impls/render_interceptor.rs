use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::intercept_mode::InterceptMode;
use crate::config::structs::configuration::Configuration;
use crate::interceptor::structs::render_interceptor::RenderInterceptor;
use crate::interceptor::types::{CacheableFn, KeyFn, FALLBACK_TTL};
use crate::pages::structs::page_rule::PageRule;
use crate::pages::structs::page_rules::PageRules;
use crate::render::enums::render_step::RenderStep;
use crate::render::structs::cache_decision::CacheDecision;
use crate::render::structs::render_context::RenderContext;
use crate::render::structs::render_result::RenderResult;
use crate::render::structs::request_cache_state::RequestCacheState;
use crate::render::traits::renderer::Renderer;
use crate::version::structs::version_check::VersionCheck;
use crate::version::structs::version_guard::VersionGuard;
use async_trait::async_trait;
use futures_util::future::join_all;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;

impl<R: Renderer> RenderInterceptor<R> {
    pub fn new(
        renderer: R,
        cache: Arc<CacheConnector>,
        config: &Configuration,
    ) -> Result<RenderInterceptor<R>, ConfigurationError> {
        let rules = config.page_rules()?;
        Self::report_overlaps(&rules);
        info!(
            "[PageCache] {} rules, {} mode, {} store",
            rules.len(),
            config.mode,
            cache.engine()
        );
        Ok(RenderInterceptor {
            renderer,
            version_guard: VersionGuard::new(cache.clone(), config.version.clone()),
            cache,
            rules,
            keys: config.key_builder(),
            mode: config.mode,
            key_fn: None,
            cacheable_fn: None,
            started: AtomicBool::new(false),
            pending: Mutex::new(Vec::new()),
        })
    }

    /// Replaces the configured rules, e.g. with rules carrying postfix functions.
    pub fn with_rules(mut self, rules: PageRules) -> Self {
        Self::report_overlaps(&rules);
        self.rules = rules;
        self
    }

    /// Overrides the configured version with the application's own.
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version_guard = VersionGuard::new(self.cache.clone(), version);
        self
    }

    pub fn with_key_fn<F>(mut self, key_fn: F) -> Self
    where
        F: Fn(&str, &RenderContext) -> Option<String> + Send + Sync + 'static,
    {
        self.key_fn = Some(Arc::new(key_fn) as KeyFn);
        self
    }

    pub fn with_cacheable_fn<F>(mut self, cacheable_fn: F) -> Self
    where
        F: Fn(&str, &RenderContext) -> bool + Send + Sync + 'static,
    {
        self.cacheable_fn = Some(Arc::new(cacheable_fn) as CacheableFn);
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn cache(&self) -> &Arc<CacheConnector> {
        &self.cache
    }

    pub fn rules(&self) -> &PageRules {
        &self.rules
    }

    pub fn version_guard(&self) -> &VersionGuard {
        &self.version_guard
    }

    fn report_overlaps(rules: &PageRules) {
        let all: Vec<&PageRule> = rules.iter().collect();
        for (earlier, later) in rules.overlaps() {
            warn!(
                "[Rules] rule #{} ({}) can match the same paths as rule #{} ({}); rule #{} wins",
                later,
                all[later].matcher(),
                earlier,
                all[earlier].matcher(),
                earlier
            );
        }
    }

    /// Runs the version check. Render calls do this themselves on first use.
    pub async fn start(&self) -> VersionCheck {
        self.started.store(true, Ordering::Release);
        self.version_guard.check().await
    }

    async fn ensure_started(&self) {
        if !self.started.swap(true, Ordering::AcqRel) {
            let _ = self.version_guard.check().await;
        }
    }

    /// Waits for every store and sentinel write started so far.
    pub async fn flush(&self) {
        let handles = std::mem::take(&mut *self.pending.lock());
        for result in join_all(handles).await {
            if let Err(e) = result {
                error!("[PageCache] Store task failed: {}", e);
            }
        }
    }

    pub async fn shutdown(&self) -> Result<(), CacheError> {
        self.flush().await;
        self.cache.close().await
    }

    pub fn resolve_ttl(&self, rule: Option<&PageRule>) -> Duration {
        rule.and_then(PageRule::ttl)
            .or(self.cache.default_ttl())
            .unwrap_or(FALLBACK_TTL)
    }

    fn is_cacheable(&self, route: &str, context: &RenderContext, rule: Option<&PageRule>) -> bool {
        match &self.cacheable_fn {
            Some(cacheable_fn) => cacheable_fn(route, context),
            None => rule.is_some(),
        }
    }

    fn derive_key(&self, route: &str, context: &RenderContext, postfix: Option<&str>) -> String {
        self.key_fn
            .as_ref()
            .and_then(|key_fn| key_fn(route, context))
            .unwrap_or_else(|| self.keys.build(route, context, postfix))
    }

    /// ROUTE_CHECK: the fresh per-request state, or `None` when the route is not cacheable.
    pub fn route_check(&self, route: &str, context: &RenderContext) -> Option<RequestCacheState> {
        let rule = self.rules.find(route);
        let custom_key = self.key_fn.as_ref().and_then(|key_fn| key_fn(route, context));
        if custom_key.is_none() && !self.is_cacheable(route, context, rule) {
            debug!("[PageCache] {} is not cacheable", route);
            return None;
        }
        let postfix = match self.mode {
            InterceptMode::precomputed => rule.and_then(|rule| rule.resolve_postfix(context)),
            InterceptMode::render_time => None,
        };
        let key = custom_key.unwrap_or_else(|| self.keys.build(route, context, postfix.as_deref()));
        Some(RequestCacheState {
            key,
            ttl: self.resolve_ttl(rule),
            postfix,
            should_cache: true,
        })
    }

    fn apply_decision(
        &self,
        route: &str,
        context: &RenderContext,
        mut state: RequestCacheState,
        decision: CacheDecision,
    ) -> RequestCacheState {
        state.should_cache = decision.should_cache;
        if let Some(ttl) = decision.ttl.filter(|ttl| !ttl.is_zero()) {
            state.ttl = ttl;
        }
        if decision.postfix.is_some() {
            state.postfix = decision.postfix;
            state.key = self.derive_key(route, context, state.postfix.as_deref());
        }
        state
    }

    /// CACHE_LOOKUP. Backend failures and unreadable artifacts count as misses.
    async fn lookup(&self, key: &str) -> Option<RenderResult> {
        match self.cache.get(key).await {
            Ok(Some(artifact)) => match RenderResult::from_artifact(&artifact) {
                Ok(result) => {
                    debug!("[PageCache] Hit {} ({} bytes)", key, artifact.len());
                    Some(result)
                }
                Err(e) => {
                    warn!("[PageCache] Ignoring unreadable artifact at {}: {}", key, e);
                    None
                }
            },
            Ok(None) => {
                debug!("[PageCache] Miss {}", key);
                None
            }
            Err(e) => {
                warn!("[PageCache] Lookup of {} failed, rendering instead: {}", key, e);
                None
            }
        }
    }

    fn store(&self, key: String, result: &RenderResult, ttl: Duration) {
        let artifact = match result.to_artifact() {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!("[PageCache] Could not serialize {}: {}", key, e);
                return;
            }
        };
        let cache = self.cache.clone();
        let handle = tokio::spawn(async move {
            match cache.set(&key, &artifact, Some(ttl)).await {
                Ok(()) => debug!("[PageCache] Stored {} for {}s", key, ttl.as_secs()),
                Err(e) => warn!("[PageCache] Storing {} failed: {}", key, e),
            }
        });
        self.track(handle);
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut pending = self.pending.lock();
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }

    /// Writes the version sentinel in the background, once per reset epoch.
    fn store_version(&self) {
        if self.version_guard.version().is_none() || self.cache.version_stored() {
            return;
        }
        let version_guard = self.version_guard.clone();
        self.track(tokio::spawn(async move {
            version_guard.store_version().await;
        }));
    }

    /// RENDER outcome: store and return, or return without storing.
    fn finish(&self, step: RenderStep, state: RequestCacheState) -> RenderStep {
        match step {
            RenderStep::Rendered(result) => {
                if result.is_storable() {
                    self.store_version();
                    if state.should_cache {
                        self.store(state.key, &result, state.ttl);
                    }
                } else {
                    debug!("[PageCache] Not storing {}: render reported an error or redirect", state.key);
                }
                RenderStep::Rendered(result)
            }
            RenderStep::Decided(decision) => {
                warn!("[PageCache] Renderer decided on {} although the cache check was skipped", state.key);
                RenderStep::Decided(decision)
            }
        }
    }

    async fn render_uncached(&self, route: &str, context: &RenderContext) -> Result<RenderStep, R::Error> {
        let step = self.renderer.render_route(route, &context.bypass()).await?;
        if let RenderStep::Rendered(result) = &step
            && result.is_storable() {
                self.store_version();
            }
        Ok(step)
    }

    async fn render_precomputed(
        &self,
        route: &str,
        context: &RenderContext,
        state: RequestCacheState,
    ) -> Result<RenderStep, R::Error> {
        if let Some(cached) = self.lookup(&state.key).await {
            return Ok(RenderStep::Rendered(cached));
        }
        let attached = context.attach(state.clone(), true);
        let step = self.renderer.render_route(route, &attached).await?;
        Ok(self.finish(step, state))
    }

    async fn render_deferred(
        &self,
        route: &str,
        context: &RenderContext,
        state: RequestCacheState,
    ) -> Result<RenderStep, R::Error> {
        let attached = context.attach(state.clone(), false);
        let decision = match self.renderer.render_route(route, &attached).await? {
            RenderStep::Decided(decision) => decision,
            rendered => {
                debug!("[PageCache] No cache decision for {}, not storing", route);
                let state = RequestCacheState {
                    should_cache: false,
                    ..state
                };
                return Ok(self.finish(rendered, state));
            }
        };
        let state = self.apply_decision(route, context, state, decision);
        if state.should_cache
            && let Some(cached) = self.lookup(&state.key).await {
                return Ok(RenderStep::Rendered(cached));
            }
        let attached = context.attach(state.clone(), true);
        let step = self.renderer.render_route(route, &attached).await?;
        Ok(self.finish(step, state))
    }
}

#[async_trait]
impl<R: Renderer> Renderer for RenderInterceptor<R> {
    type Error = R::Error;

    async fn render_route(&self, route: &str, context: &RenderContext) -> Result<RenderStep, Self::Error> {
        if context.spa {
            debug!("[PageCache] {} is a single-page-app request, rendering directly", route);
            return self.renderer.render_route(route, context).await;
        }
        self.ensure_started().await;
        match self.route_check(route, context) {
            None => self.render_uncached(route, context).await,
            Some(state) => match self.mode {
                InterceptMode::precomputed => self.render_precomputed(route, context, state).await,
                InterceptMode::render_time => self.render_deferred(route, context, state).await,
            },
        }
    }
}
