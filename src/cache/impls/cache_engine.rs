use crate::cache::enums::cache_engine::CacheEngine;
use std::fmt;

impl fmt::Display for CacheEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEngine::memory => write!(f, "memory"),
            CacheEngine::redis => write!(f, "redis"),
            CacheEngine::memcached => write!(f, "memcached"),
            CacheEngine::multi => write!(f, "multi"),
        }
    }
}

impl CacheEngine {
    /// Scheme used when the engine talks to a network server, `None` for in-process engines.
    pub fn url_scheme(&self) -> Option<&'static str> {
        match self {
            CacheEngine::redis => Some("redis://"),
            CacheEngine::memcached => Some("memcache://"),
            CacheEngine::memory | CacheEngine::multi => None,
        }
    }

    pub fn default_port(&self) -> Option<u16> {
        match self {
            CacheEngine::redis => Some(6379),
            CacheEngine::memcached => Some(11211),
            CacheEngine::memory | CacheEngine::multi => None,
        }
    }

    pub fn is_distributed(&self) -> bool {
        self.url_scheme().is_some()
    }
}
