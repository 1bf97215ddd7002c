use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    pub hostname: Option<String>,
    pub host: Option<String>,
    /// Header names are stored lowercase.
    pub headers: BTreeMap<String, String>,
}
