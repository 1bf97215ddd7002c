use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::version::enums::version_status::VersionStatus;
use crate::version::structs::version_check::VersionCheck;
use crate::version::structs::version_guard::VersionGuard;
use log::{debug, error, info, warn};
use std::sync::Arc;

pub const VERSION_SENTINEL_KEY: &str = "appVersion";

impl VersionGuard {
    pub fn new(cache: Arc<CacheConnector>, version: Option<String>) -> VersionGuard {
        VersionGuard {
            cache,
            version: version.filter(|version| !version.is_empty()),
        }
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Reads the sentinel and starts a full reset when it does not match.
    pub async fn check(&self) -> VersionCheck {
        let Some(version) = &self.version else {
            return VersionCheck::new(VersionStatus::Disabled);
        };
        match self.cache.get(VERSION_SENTINEL_KEY).await {
            Ok(Some(stored)) if stored == *version => {
                debug!("[Version] Cache is at version {}", version);
                VersionCheck::new(VersionStatus::Current)
            }
            Ok(previous) => {
                info!(
                    "[Version] Cache updated from {} to {}",
                    previous.as_deref().unwrap_or("<none>"),
                    version
                );
                let cache = self.cache.clone();
                let reset = tokio::spawn(async move {
                    match cache.reset_all().await {
                        Ok(()) => info!("[Version] Cache reset"),
                        Err(e) => error!("[Version] Cache reset failed: {}", e),
                    }
                });
                VersionCheck {
                    status: VersionStatus::Outdated { previous },
                    reset: Some(reset),
                }
            }
            Err(e) => {
                warn!("[Version] Could not read the stored version, keeping the cache: {}", e);
                VersionCheck::new(VersionStatus::Unknown)
            }
        }
    }

    /// Runs `check`, waits for the reset and records the configured version,
    /// so a second run finds the cache current.
    pub async fn refresh(&self) -> VersionStatus {
        let status = self.check().await.wait().await;
        if matches!(status, VersionStatus::Outdated { .. }) && !self.store_version().await {
            warn!("[Version] Cache was reset but version {} is not recorded", self.version().unwrap_or_default());
        }
        status
    }

    /// Persists the sentinel without expiry, at most once until the next reset.
    /// Returns whether this call wrote it.
    pub async fn store_version(&self) -> bool {
        let Some(version) = &self.version else {
            return false;
        };
        if !self.cache.claim_version_store() {
            return false;
        }
        match self.cache.set(VERSION_SENTINEL_KEY, version, None).await {
            Ok(()) => {
                debug!("[Version] Stored version {}", version);
                true
            }
            Err(e) => {
                self.cache.release_version_store();
                warn!("[Version] Could not store version {}: {}", version, e);
                false
            }
        }
    }
}
