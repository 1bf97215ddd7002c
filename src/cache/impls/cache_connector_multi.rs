use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_multi::CacheConnectorMulti;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::{debug, warn};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

impl fmt::Debug for CacheConnectorMulti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMulti")
            .field("members", &self.members.len())
            .finish()
    }
}

impl CacheConnectorMulti {
    pub fn new(members: Vec<Arc<dyn CacheBackend>>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Arc<dyn CacheBackend>] {
        &self.members
    }

    // Writes are not awaited: every member gets its own task and failures are only logged.
    fn fan_out<F, Fut>(&self, operation: &'static str, key: &str, build: F)
    where
        F: Fn(Arc<dyn CacheBackend>) -> Fut,
        Fut: Future<Output = Result<(), CacheError>> + Send + 'static,
    {
        for (index, member) in self.members.iter().enumerate() {
            let future = build(member.clone());
            let key = key.to_string();
            tokio::spawn(async move {
                if let Err(e) = future.await {
                    warn!("[Multi] {} of {} failed on member #{}: {}", operation, key, index, e);
                }
            });
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMulti {
    async fn ping(&self) -> Result<(), CacheError> {
        for member in &self.members {
            member.ping().await?;
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut answered = false;
        let mut last_error = None;
        for (index, member) in self.members.iter().enumerate() {
            match member.get(key).await {
                Ok(Some(value)) => {
                    debug!("[Multi] Hit {} on member #{}", key, index);
                    return Ok(Some(value));
                }
                Ok(None) => answered = true,
                Err(e) => {
                    warn!("[Multi] Read of {} failed on member #{}: {}", key, index, e);
                    last_error = Some(e);
                }
            }
        }
        match last_error {
            Some(e) if !answered => Err(e),
            _ => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let owned_key = key.to_string();
        let value = value.to_string();
        self.fan_out("set", key, |member| {
            let key = owned_key.clone();
            let value = value.clone();
            async move { member.set(&key, &value, ttl).await }
        });
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let owned_key = key.to_string();
        self.fan_out("delete", key, |member| {
            let key = owned_key.clone();
            async move { member.delete(&key).await }
        });
        Ok(())
    }

    async fn reset_all(&self) -> Result<(), CacheError> {
        self.fan_out("reset", "*", |member| async move { member.reset_all().await });
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        for member in &self.members {
            member.close().await?;
        }
        Ok(())
    }
}
