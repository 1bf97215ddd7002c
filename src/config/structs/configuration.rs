use crate::config::enums::intercept_mode::InterceptMode;
use crate::config::enums::page_rule_config::PageRuleConfig;
use crate::config::structs::store_config::StoreConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub prefix: Option<String>,
    pub use_host_prefix: bool,
    pub version: Option<String>,
    pub mode: InterceptMode,
    pub ssr: bool,
    pub pages: Vec<PageRuleConfig>,
    pub store: StoreConfig,
}
