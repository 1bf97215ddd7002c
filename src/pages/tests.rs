#[cfg(test)]
mod pages_tests {
    mod route_matcher_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::pages::enums::route_matcher::RouteMatcher;

        #[test]
        fn test_prefix_matches_by_start() {
            let matcher = RouteMatcher::prefix("/catalog");
            assert!(matcher.matches("/catalog"));
            assert!(matcher.matches("/catalog/accessories"));
            assert!(!matcher.matches("/about"));
        }

        #[test]
        fn test_pattern_matches_anywhere() {
            let matcher = RouteMatcher::pattern("/b/").unwrap();
            assert!(matcher.matches("/b/x"));
            assert!(matcher.matches("/a/b/x"));
            let anchored = RouteMatcher::pattern("^/b/").unwrap();
            assert!(!anchored.matches("/a/b/x"));
        }

        #[test]
        fn test_parse() {
            assert!(matches!(RouteMatcher::parse("/a").unwrap(), RouteMatcher::Prefix(_)));
            assert!(matches!(RouteMatcher::parse("~^/b/").unwrap(), RouteMatcher::Pattern(_)));
            assert!(matches!(RouteMatcher::parse(""), Err(ConfigurationError::InvalidRule(_))));
            assert!(matches!(RouteMatcher::parse("~(unclosed"), Err(ConfigurationError::InvalidRule(_))));
        }

        #[test]
        fn test_display_round_trips_through_parse() {
            for rule in ["/a", "~^/b/[0-9]+$"] {
                assert_eq!(RouteMatcher::parse(rule).unwrap().to_string(), rule);
            }
        }

        #[test]
        fn test_overlaps() {
            let catalog = RouteMatcher::prefix("/catalog");
            let accessories = RouteMatcher::prefix("/catalog/accessories");
            let about = RouteMatcher::prefix("/about");
            let pattern = RouteMatcher::pattern("^/catalog").unwrap();
            let other_pattern = RouteMatcher::pattern("^/catalog/").unwrap();
            assert!(catalog.overlaps(&accessories));
            assert!(accessories.overlaps(&catalog));
            assert!(!catalog.overlaps(&about));
            assert!(pattern.overlaps(&accessories));
            assert!(!pattern.overlaps(&about));
            assert!(!pattern.overlaps(&other_pattern));
        }
    }

    mod page_rules_tests {
        use crate::config::enums::page_rule_config::PageRuleConfig;
        use crate::config::structs::page_rule_table::PageRuleTable;
        use crate::pages::structs::page_rule::PageRule;
        use crate::pages::structs::page_rules::PageRules;
        use crate::render::structs::render_context::RenderContext;
        use std::time::Duration;

        fn rules(entries: &[&str]) -> PageRules {
            let config: Vec<PageRuleConfig> = entries
                .iter()
                .map(|entry| PageRuleConfig::Path(entry.to_string()))
                .collect();
            PageRules::from_config(&config).unwrap()
        }

        #[test]
        fn test_zero_ttl_is_no_override() {
            assert_eq!(PageRule::prefix("/a").with_ttl(Duration::ZERO).ttl(), None);
            assert_eq!(PageRule::prefix("/a").with_ttl(Duration::from_secs(5)).ttl(), Some(Duration::from_secs(5)));
        }

        #[test]
        fn test_find_prefix_and_pattern() {
            let rules = rules(&["/a", "~^/b/"]);
            assert_eq!(rules.find("/a/extra").unwrap().matcher().to_string(), "/a");
            assert_eq!(rules.find("/b/x").unwrap().matcher().to_string(), "~^/b/");
            assert!(rules.find("/c").is_none());
            assert!(rules.find("/b").is_none());
        }

        #[test]
        fn test_empty_rules_match_nothing() {
            let rules = PageRules::default();
            assert!(rules.is_empty());
            assert!(rules.find("/").is_none());
        }

        #[test]
        fn test_first_declared_rule_wins() {
            let rules = PageRules::new(vec![
                PageRule::prefix("/catalog").with_ttl(Duration::from_secs(60)),
                PageRule::prefix("/catalog/accessories").with_ttl(Duration::from_secs(5)),
            ]);
            assert_eq!(
                rules.find("/catalog/accessories").unwrap().ttl(),
                Some(Duration::from_secs(60))
            );
            assert_eq!(rules.overlaps(), vec![(0, 1)]);
        }

        #[test]
        fn test_overlaps_reports_every_pair() {
            let rules = rules(&["/a", "/about", "/b", "~^/a"]);
            assert_eq!(rules.overlaps(), vec![(0, 1), (0, 3), (1, 3)]);
        }

        #[test]
        fn test_rule_table_with_postfix() {
            let rule = PageRule::from_config(&PageRuleConfig::Rule(PageRuleTable {
                pattern: Some("^/product/".to_string()),
                postfix: Some("mobile".to_string()),
                ..Default::default()
            }))
            .unwrap();
            assert!(rule.matches("/product/1"));
            assert_eq!(rule.ttl(), None);
            assert_eq!(rule.resolve_postfix(&RenderContext::default()).as_deref(), Some("mobile"));
        }

        #[test]
        fn test_postfix_function_reads_context() {
            let rule = PageRule::prefix("/").with_postfix_fn(|context| {
                context.param("device").unwrap_or("desktop").to_string()
            });
            let mobile = RenderContext::default().with_param("device", "mobile");
            assert_eq!(rule.resolve_postfix(&mobile).as_deref(), Some("mobile"));
            assert_eq!(rule.resolve_postfix(&RenderContext::default()).as_deref(), Some("desktop"));
        }

        #[test]
        fn test_push_appends_last() {
            let mut rules = rules(&["/a"]);
            rules.push(PageRule::prefix("/"));
            assert_eq!(rules.len(), 2);
            assert_eq!(rules.find("/a").unwrap().matcher().to_string(), "/a");
            assert_eq!(rules.find("/z").unwrap().matcher().to_string(), "/");
        }
    }

    mod cache_key_builder_tests {
        use crate::pages::structs::cache_key_builder::CacheKeyBuilder;
        use crate::render::structs::render_context::RenderContext;
        use crate::render::structs::request_info::RequestInfo;
        use proptest::prelude::*;

        #[test]
        fn test_plain_key() {
            let keys = CacheKeyBuilder::new(None, false);
            assert_eq!(
                keys.build("/catalog/accessories", &RenderContext::default(), None),
                "page:catalog.accessories"
            );
        }

        #[test]
        fn test_prefixed_key() {
            let keys = CacheKeyBuilder::new(Some("shop".to_string()), false);
            assert_eq!(
                keys.build("/catalog/accessories", &RenderContext::default(), None),
                "shop:page:catalog.accessories"
            );
        }

        #[test]
        fn test_empty_prefix_is_ignored() {
            let keys = CacheKeyBuilder::new(Some(String::new()), false);
            assert_eq!(keys.build("/a", &RenderContext::default(), None), "page:a");
        }

        #[test]
        fn test_host_prefixed_key() {
            let keys = CacheKeyBuilder::new(None, true);
            let context = RenderContext::new(RequestInfo::new().with_hostname("example.local"));
            assert_eq!(keys.build("/a/b", &context, None), "page:example.local.a.b");
        }

        #[test]
        fn test_host_prefix_falls_back_to_forwarded_headers() {
            let keys = CacheKeyBuilder::new(None, true);
            let context = RenderContext::new(RequestInfo::new().with_header("X-Forwarded-Host", "edge.local"));
            assert_eq!(keys.build("/a", &context, None), "page:edge.local.a");
        }

        #[test]
        fn test_host_prefix_without_hostname() {
            let keys = CacheKeyBuilder::new(None, true);
            assert_eq!(keys.build("/a", &RenderContext::default(), None), "page:a");
        }

        #[test]
        fn test_postfix() {
            let keys = CacheKeyBuilder::new(Some("shop".to_string()), false);
            let context = RenderContext::default();
            assert_eq!(keys.build("/a", &context, Some("mobile")), "shop:page:a_mobile");
            assert_eq!(keys.build("/a", &context, Some("")), "shop:page:a");
        }

        #[test]
        fn test_root_route() {
            let keys = CacheKeyBuilder::new(None, false);
            assert_eq!(keys.build("/", &RenderContext::default(), None), "page:");
        }

        #[test]
        fn test_dotted_route_collapses_slashes() {
            assert_eq!(CacheKeyBuilder::dotted_route("/catalog//accessories/"), "catalog.accessories");
        }

        proptest! {
            #[test]
            fn prop_key_is_deterministic(route in "(/[a-z0-9]{1,8}){0,5}", postfix in "[a-z]{0,6}") {
                let keys = CacheKeyBuilder::new(Some("shop".to_string()), false);
                let context = RenderContext::default();
                let first = keys.build(&route, &context, Some(&postfix));
                let second = keys.build(&route, &context, Some(&postfix));
                prop_assert_eq!(&first, &second);
                prop_assert!(first.starts_with("shop:page:"));
                prop_assert!(!first.contains('/'));
            }

            #[test]
            fn prop_distinct_postfixes_give_distinct_keys(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
                prop_assume!(a != b);
                let keys = CacheKeyBuilder::new(None, false);
                let context = RenderContext::default();
                prop_assert_ne!(
                    keys.build("/a", &context, Some(&a)),
                    keys.build("/a", &context, Some(&b))
                );
            }
        }
    }
}
