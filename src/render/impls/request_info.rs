use crate::render::structs::request_info::RequestInfo;

const FORWARDED_HOST_HEADER: &str = "x-forwarded-host";
const FORWARDED_HOSTNAME_HEADER: &str = "x-forwarded-hostname";

impl RequestInfo {
    pub fn new() -> RequestInfo {
        RequestInfo::default()
    }

    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = Some(hostname.to_string());
        self
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// First present of: hostname, host, `X-Forwarded-Host`, `X-Forwarded-Hostname`.
    pub fn resolve_hostname(&self) -> Option<&str> {
        [
            self.hostname.as_deref(),
            self.host.as_deref(),
            self.header(FORWARDED_HOST_HEADER),
            self.header(FORWARDED_HOSTNAME_HEADER),
        ]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
    }
}
