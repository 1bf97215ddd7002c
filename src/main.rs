use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use page_cache::cache::structs::cache_connector::CacheConnector;
use page_cache::cache::traits::cache_backend::CacheBackend;
use page_cache::common::common::{parse_key_value, setup_logging};
use page_cache::config::structs::configuration::Configuration;
use page_cache::interceptor::types::FALLBACK_TTL;
use page_cache::render::structs::render_context::RenderContext;
use page_cache::render::structs::request_info::RequestInfo;
use page_cache::structs::{Cli, Command};
use page_cache::version::structs::version_guard::VersionGuard;
use tokio::runtime::Builder;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Command::Key { route, host, params } = &args.command {
        return print_key(&config, route, host.as_deref(), params);
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let cache = match CacheConnector::new(&config.store) {
                Ok(cache) => Arc::new(cache),
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(101);
                }
            };

            let code = match args.command {
                Command::CheckVersion => {
                    let guard = VersionGuard::new(cache.clone(), config.version.clone());
                    let status = guard.refresh().await;
                    info!("[Version] {}", status);
                    0
                }
                Command::Reset => match cache.reset_all().await {
                    Ok(()) => {
                        info!("[Cache] {} cache reset", cache.engine());
                        0
                    }
                    Err(e) => {
                        error!("[Cache] Reset failed: {}", e);
                        1
                    }
                },
                Command::Ping => match cache.ping().await {
                    Ok(()) => {
                        info!("[Cache] {} cache answered", cache.engine());
                        0
                    }
                    Err(e) => {
                        error!("[Cache] Ping failed: {}", e);
                        1
                    }
                },
                Command::Key { .. } => 0,
            };

            if let Err(e) = cache.close().await {
                error!("[Cache] Close failed: {}", e);
            }
            if code != 0 {
                exit(code);
            }
            Ok(())
        })
}

fn print_key(config: &Configuration, route: &str, host: Option<&str>, params: &[String]) -> std::io::Result<()>
{
    let rules = match config.page_rules() {
        Ok(rules) => rules,
        Err(e) => {
            error!("[Rules] {}", e);
            exit(101);
        }
    };

    let mut request = RequestInfo::new();
    if let Some(host) = host {
        request = request.with_hostname(host);
    }
    let mut context = RenderContext::new(request);
    for param in params {
        match parse_key_value(param) {
            Ok((name, value)) => context = context.with_param(&name, &value),
            Err(e) => {
                error!("[CLI] {}", e);
                exit(2);
            }
        }
    }

    match rules.find(route) {
        None => println!("{} is not cacheable", route),
        Some(rule) => {
            let postfix = rule.resolve_postfix(&context);
            let key = config.key_builder().build(route, &context, postfix.as_deref());
            let ttl = rule.ttl()
                .or(config.store.default_ttl())
                .unwrap_or(FALLBACK_TTL);
            println!("{} (ttl {}s)", key, ttl.as_secs());
        }
    }
    Ok(())
}
