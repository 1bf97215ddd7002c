use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum CacheEngine {
    #[default]
    memory,
    #[serde(alias = "distributed-kv")]
    redis,
    #[serde(alias = "memcached-kv", alias = "memcache")]
    memcached,
    multi,
}
