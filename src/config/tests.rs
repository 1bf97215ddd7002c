#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::cache::enums::cache_engine::CacheEngine;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::enums::intercept_mode::InterceptMode;
        use crate::config::enums::page_rule_config::PageRuleConfig;
        use crate::config::structs::configuration::Configuration;
        use crate::config::structs::page_rule_table::PageRuleTable;
        use std::time::Duration;

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.prefix, None);
            assert!(!config.use_host_prefix);
            assert_eq!(config.version, None);
            assert_eq!(config.mode, InterceptMode::precomputed);
            assert!(config.ssr);
            assert!(config.pages.is_empty());
            assert_eq!(config.store.engine, CacheEngine::memory);
            assert_eq!(config.store.default_ttl(), Some(Duration::from_secs(600)));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_load_full_document() {
            let toml = r#"
                log_level = "debug"
                prefix = "shop"
                use_host_prefix = true
                version = "1.4.2"
                mode = "render_time"
                pages = [
                    "/catalog",
                    "~^/product/[0-9]+$",
                    { url = "/blog", ttl = 120, postfix = "mobile" },
                    { pattern = "^/news/" },
                ]

                [store]
                type = "redis"
                host = "10.0.0.5"
                port = 6380
                db = 2
                ttl = 300
                configure = [["maxmemory-policy", "allkeys-lru"]]
            "#;
            let config = Configuration::load(toml.as_bytes()).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.prefix.as_deref(), Some("shop"));
            assert!(config.use_host_prefix);
            assert_eq!(config.version.as_deref(), Some("1.4.2"));
            assert_eq!(config.mode, InterceptMode::render_time);
            assert_eq!(config.pages.len(), 4);
            assert_eq!(config.pages[0], PageRuleConfig::Path("/catalog".to_string()));
            assert_eq!(
                config.pages[2],
                PageRuleConfig::Rule(PageRuleTable {
                    url: Some("/blog".to_string()),
                    pattern: None,
                    ttl: Some(120),
                    postfix: Some("mobile".to_string()),
                })
            );
            assert_eq!(config.store.engine, CacheEngine::redis);
            assert_eq!(config.store.port, Some(6380));
            assert_eq!(
                config.store.configure,
                vec![("maxmemory-policy".to_string(), "allkeys-lru".to_string())]
            );
            assert_eq!(
                config.store.connection_url().as_deref(),
                Some("redis://10.0.0.5:6380/2")
            );
            assert!(config.validate().is_ok());

            let rules = config.page_rules().unwrap();
            assert_eq!(rules.len(), 4);
            assert!(rules.find("/product/42").is_some());
            assert!(rules.find("/product/abc").is_none());
            assert_eq!(rules.find("/blog/post").unwrap().ttl(), Some(Duration::from_secs(120)));
        }

        #[test]
        fn test_missing_fields_use_defaults() {
            let config = Configuration::load(b"prefix = \"shop\"").unwrap();
            assert_eq!(config.prefix.as_deref(), Some("shop"));
            assert_eq!(config.log_level, "info");
            assert_eq!(config.store.engine, CacheEngine::memory);
        }

        #[test]
        fn test_store_type_aliases() {
            let config = Configuration::load(b"[store]\ntype = \"distributed-kv\"").unwrap();
            assert_eq!(config.store.engine, CacheEngine::redis);
            let config = Configuration::load(b"[store]\ntype = \"memcached-kv\"").unwrap();
            assert_eq!(config.store.engine, CacheEngine::memcached);
        }

        #[test]
        fn test_multi_store_members() {
            let toml = r#"
                [store]
                type = "multi"

                [[store.stores]]
                type = "memory"
                max = 100

                [[store.stores]]
                type = "memcached"
                host = "cache.local"
            "#;
            let config = Configuration::load(toml.as_bytes()).unwrap();
            assert_eq!(config.store.engine, CacheEngine::multi);
            assert_eq!(config.store.stores.len(), 2);
            assert_eq!(config.store.stores[0].max, Some(100));
            assert_eq!(
                config.store.stores[1].connection_url().as_deref(),
                Some("memcache://cache.local:11211")
            );
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_unknown_store_type_fails_to_parse() {
            assert!(Configuration::load(b"[store]\ntype = \"couchbase\"").is_err());
        }

        #[test]
        fn test_invalid_log_level() {
            let config = Configuration {
                log_level: "loud".to_string(),
                ..Configuration::init()
            };
            assert!(matches!(config.validate(), Err(ConfigurationError::InvalidLogLevel(_))));
        }

        #[test]
        fn test_log_level_filter() {
            let mut config = Configuration::init();
            assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Info);
            config.log_level = "trace".to_string();
            assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Trace);
            config.log_level = "off".to_string();
            assert_eq!(config.log_level_filter().unwrap(), log::LevelFilter::Off);
        }

        #[test]
        fn test_invalid_rules_fail_validation() {
            let cases = [
                "pages = [\"\"]",
                "pages = [\"~[unclosed\"]",
                "pages = [{ ttl = 10 }]",
                "pages = [{ url = \"/a\", pattern = \"^/a\" }]",
                "pages = [{ url = \"/a\", ttl = 0 }]",
            ];
            for case in cases {
                let config = Configuration::load(case.as_bytes()).unwrap();
                assert!(
                    matches!(config.validate(), Err(ConfigurationError::InvalidRule(_))),
                    "expected {} to be rejected",
                    case
                );
            }
        }

        #[test]
        fn test_key_builder_uses_prefix() {
            let config = Configuration {
                prefix: Some("shop".to_string()),
                ..Configuration::init()
            };
            let context = Default::default();
            assert_eq!(
                config.key_builder().build("/catalog/accessories", &context, None),
                "shop:page:catalog.accessories"
            );
        }
    }

    mod store_config_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::store_config::StoreConfig;

        #[test]
        fn test_redis_url_defaults() {
            let store = StoreConfig {
                host: None,
                port: None,
                ..StoreConfig::redis("ignored", 1)
            };
            assert_eq!(store.connection_url().as_deref(), Some("redis://127.0.0.1:6379/0"));
        }

        #[test]
        fn test_redis_url_with_password() {
            let store = StoreConfig {
                password: Some("secret".to_string()),
                db: Some(3),
                ..StoreConfig::redis("cache.local", 6379)
            };
            assert_eq!(
                store.connection_url().as_deref(),
                Some("redis://:secret@cache.local:6379/3")
            );
        }

        #[test]
        fn test_explicit_url_wins() {
            let store = StoreConfig {
                url: Some("redis://other:7000/1".to_string()),
                ..StoreConfig::redis("cache.local", 6379)
            };
            assert_eq!(store.connection_url().as_deref(), Some("redis://other:7000/1"));
        }

        #[test]
        fn test_memory_has_no_url() {
            assert_eq!(StoreConfig::memory().connection_url(), None);
            assert_eq!(StoreConfig::multi(vec![StoreConfig::memory()]).connection_url(), None);
        }

        #[test]
        fn test_zero_bounds_are_rejected() {
            let store = StoreConfig {
                max: Some(0),
                ..StoreConfig::memory()
            };
            assert!(matches!(store.validate(), Err(ConfigurationError::InvalidStore(_))));
            let store = StoreConfig {
                ttl: Some(0),
                ..StoreConfig::memory()
            };
            assert!(matches!(store.validate(), Err(ConfigurationError::InvalidStore(_))));
        }

        #[test]
        fn test_members_only_on_multi() {
            let store = StoreConfig {
                stores: vec![StoreConfig::memory()],
                ..StoreConfig::memory()
            };
            assert!(matches!(store.validate(), Err(ConfigurationError::InvalidStore(_))));
        }

        #[test]
        fn test_invalid_member_fails_multi() {
            let bad_member = StoreConfig {
                ttl: Some(0),
                ..StoreConfig::memory()
            };
            let store = StoreConfig::multi(vec![StoreConfig::memory(), bad_member]);
            assert!(matches!(store.validate(), Err(ConfigurationError::InvalidStore(_))));
        }

        #[test]
        fn test_startup_commands_on_redis_are_accepted() {
            let store = StoreConfig {
                configure: vec![("maxmemory".to_string(), "64mb".to_string())],
                ..StoreConfig::redis("127.0.0.1", 6379)
            };
            assert!(store.validate().is_ok());
        }
    }

    mod file_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::config::structs::store_config::StoreConfig;
        use tempfile::TempDir;

        #[test]
        fn test_save_and_load_file() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();

            let config = Configuration {
                prefix: Some("shop".to_string()),
                version: Some("2".to_string()),
                store: StoreConfig::multi(vec![StoreConfig::memory(), StoreConfig::memcached("127.0.0.1", 11211)]),
                ..Configuration::init()
            };
            Configuration::save_file(path, config.to_toml().unwrap()).unwrap();
            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded, config);
        }

        #[test]
        fn test_load_missing_file() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("missing.toml");
            let result = Configuration::load_file(path.to_str().unwrap());
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_load_corrupt_file() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("corrupt.toml");
            std::fs::write(&path, "log_level = [").unwrap();
            let result = Configuration::load_file(path.to_str().unwrap());
            assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
        }

        #[test]
        fn test_load_from_file_without_create() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            assert!(Configuration::load_from_file(path.to_str().unwrap(), false).is_err());
            assert!(!path.exists());
        }

        #[test]
        fn test_load_from_file_creates_default() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(Configuration::load_from_file(path, true).is_err());
            let created = Configuration::load_from_file(path, false).unwrap();
            assert_eq!(created, Configuration::init());
        }

        #[test]
        fn test_load_from_file_rejects_invalid_config() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "log_level = \"loud\"").unwrap();
            assert!(Configuration::load_from_file(path.to_str().unwrap(), false).is_err());
        }
    }
}
