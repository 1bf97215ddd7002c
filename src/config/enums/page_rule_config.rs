use crate::config::structs::page_rule_table::PageRuleTable;
use serde::{Deserialize, Serialize};

/// Either a bare string (literal prefix, or a pattern when it starts with `~`)
/// or a full rule table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PageRuleConfig {
    Path(String),
    Rule(PageRuleTable),
}
