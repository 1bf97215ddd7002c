use crate::version::enums::version_status::VersionStatus;
use tokio::task::JoinHandle;

/// Result of a startup check. `reset` is the fire-and-forget flush, if one was started.
#[derive(Debug)]
pub struct VersionCheck {
    pub status: VersionStatus,
    pub reset: Option<JoinHandle<()>>,
}
