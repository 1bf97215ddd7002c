use crate::cache::enums::cache_engine::CacheEngine;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(rename = "type")]
    pub engine: CacheEngine,
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub db: Option<i64>,
    pub password: Option<String>,
    /// Default entry lifetime in seconds.
    pub ttl: Option<u64>,
    /// Entry bound for the memory engine.
    pub max: Option<usize>,
    /// `CONFIG SET` pairs applied once at startup (redis only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configure: Vec<(String, String)>,
    /// Members of a `multi` store, in read order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<StoreConfig>,
}
