#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// No version configured.
    Disabled,
    Current,
    /// The stored version differs (or is missing); a reset was started.
    Outdated { previous: Option<String> },
    /// The stored version could not be read; the cache is left alone.
    Unknown,
}
