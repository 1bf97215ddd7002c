//! # Page Cache
//!
//! A page-level output cache that sits in front of a server-side page renderer.
//!
//! ## Overview
//!
//! For each incoming route the cache decides whether the rendered output may
//! be served from a prior render, derives a deterministic cache key for it and
//! intercepts the render call: hits skip rendering entirely, misses render once
//! and persist the result for later requests.
//!
//! ## Features
//!
//! - **Uniform Backends**: memory, Redis, Memcache and ordered multi-tier
//!   composites behind one asynchronous contract
//! - **Deterministic Keys**: `[prefix:]page:<dotted.route>[_postfix]`, with
//!   optional host prefixing, identical across processes
//! - **First-Match Rules**: literal-prefix and pattern rules with per-rule
//!   ttl and key postfix
//! - **Version Epochs**: the whole cache is flushed when the deployed
//!   application version changes
//! - **Render Interception**: pre-computed keys, or caching decisions taken
//!   mid-render and returned as an explicit `RenderStep`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use page_cache::cache::structs::cache_connector::CacheConnector;
//! use page_cache::config::structs::configuration::Configuration;
//! use page_cache::interceptor::structs::render_interceptor::RenderInterceptor;
//!
//! let config = Configuration::load_file("config.toml")?;
//! let cache = Arc::new(CacheConnector::new(&config.store)?);
//! let pages = RenderInterceptor::new(renderer, cache, &config)?;
//! pages.start().await;
//!
//! let step = pages.render_route("/catalog/accessories/", &context).await?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Cache backends and the shared cache handle
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`interceptor`] - The render interceptor and render-time middleware
//! - [`pages`] - Page rules, route matching and key derivation
//! - [`render`] - The renderer contract, render context and artifacts
//! - [`structs`] - CLI argument parsing
//! - [`version`] - Version-epoch invalidation

/// Cache backends behind one asynchronous contract.
///
/// Memory, Redis, Memcache and multi-tier backends, plus the `CacheConnector`
/// handle shared by the rest of the crate.
pub mod cache;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and validating the TOML configuration.
pub mod config;

/// Render interception.
///
/// Wraps a renderer and orchestrates lookup, hit, miss and store.
pub mod interceptor;

/// Page rules, route matching and cache key derivation.
pub mod pages;

/// The renderer contract the cache sits in front of.
pub mod render;

/// CLI argument parsing.
pub mod structs;

/// Version-epoch invalidation.
pub mod version;
