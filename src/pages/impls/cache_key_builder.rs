use crate::pages::structs::cache_key_builder::CacheKeyBuilder;
use crate::render::structs::render_context::RenderContext;

impl CacheKeyBuilder {
    pub fn new(prefix: Option<String>, use_host_prefix: bool) -> CacheKeyBuilder {
        CacheKeyBuilder {
            prefix: prefix.filter(|prefix| !prefix.is_empty()),
            use_host_prefix,
        }
    }

    /// `/catalog/accessories/` -> `catalog.accessories`
    pub fn dotted_route(route: &str) -> String {
        route
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// `[<prefix>:]page:<dotted-route>[_<postfix>]`; an empty postfix is left out.
    pub fn build(&self, route: &str, context: &RenderContext, postfix: Option<&str>) -> String {
        let hostname = if self.use_host_prefix {
            context.request.resolve_hostname()
        } else {
            None
        };
        let dotted = match hostname {
            Some(hostname) => Self::dotted_route(&format!("{}/{}", hostname, route)),
            None => Self::dotted_route(route),
        };
        let mut key = match &self.prefix {
            Some(prefix) => format!("{}:page:{}", prefix, dotted),
            None => format!("page:{}", dotted),
        };
        if let Some(postfix) = postfix.filter(|postfix| !postfix.is_empty()) {
            key.push('_');
            key.push_str(postfix);
        }
        key
    }
}
