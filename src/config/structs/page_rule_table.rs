use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PageRuleTable {
    pub url: Option<String>,
    pub pattern: Option<String>,
    pub ttl: Option<u64>,
    pub postfix: Option<String>,
}
