use crate::version::enums::version_status::VersionStatus;
use std::fmt;

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionStatus::Disabled => write!(f, "disabled"),
            VersionStatus::Current => write!(f, "current"),
            VersionStatus::Outdated { previous: Some(previous) } => write!(f, "outdated (was {})", previous),
            VersionStatus::Outdated { previous: None } => write!(f, "outdated (none stored)"),
            VersionStatus::Unknown => write!(f, "unknown"),
        }
    }
}
