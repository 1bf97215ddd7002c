use crate::version::enums::version_status::VersionStatus;
use crate::version::structs::version_check::VersionCheck;
use log::error;

impl VersionCheck {
    pub fn new(status: VersionStatus) -> VersionCheck {
        VersionCheck { status, reset: None }
    }

    /// Waits for the reset task, if any, and returns the status.
    pub async fn wait(self) -> VersionStatus {
        if let Some(reset) = self.reset
            && let Err(e) = reset.await {
                error!("[Version] Reset task failed: {}", e);
            }
        self.status
    }
}
