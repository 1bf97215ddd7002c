use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use async_trait::async_trait;
use log::{debug, error, info};
use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use std::fmt;
use std::time::Duration;

impl fmt::Debug for CacheConnectorRedis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorRedis")
            .field("address", &self.address)
            .field("connected", &self.connection.lock().is_some())
            .finish()
    }
}

impl CacheConnectorRedis {
    /// Creates the client without touching the network; the connection is
    /// opened on first use and never re-established in the background.
    pub fn new(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        Ok(Self {
            client,
            connection: Mutex::new(None),
            address: url.to_string(),
        })
    }

    pub(crate) fn expiration_millis(ttl: Duration) -> u64 {
        u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
    }

    async fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        let cached = self.connection.lock().clone();
        if let Some(connection) = cached {
            return Ok(connection);
        }
        let connection = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        info!("[Redis] Connected to {}", self.address);
        *self.connection.lock() = Some(connection.clone());
        Ok(connection)
    }

    /// Runs `CONFIG SET <name> <value>` for every pair, in order, on a
    /// dedicated connection that is dropped afterwards.
    pub async fn run_startup_commands(
        client: redis::Client,
        commands: Vec<(String, String)>,
    ) -> Result<(), CacheError> {
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        for (name, value) in commands {
            let reply: String = redis::cmd("CONFIG")
                .arg("SET")
                .arg(&name)
                .arg(&value)
                .query_async(&mut conn)
                .await?;
            if reply != "OK" {
                return Err(CacheError::OperationError(format!(
                    "CONFIG SET {} {} answered {}",
                    name, value, reply
                )));
            }
            debug!("[Redis] CONFIG SET {} {}", name, value);
        }
        Ok(())
    }

    pub fn spawn_startup_commands(&self, commands: Vec<(String, String)>) {
        let client = self.client.clone();
        let address = self.address.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let count = commands.len();
                    match Self::run_startup_commands(client, commands).await {
                        Ok(()) => info!("[Redis] Applied {} startup commands on {}", count, address),
                        Err(e) => error!("[Redis] Startup commands failed on {}: {}", address, e),
                    }
                });
            }
            Err(_) => {
                error!("[Redis] No async runtime available, skipping startup commands for {}", address);
            }
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl
            && !ttl.is_zero() {
                cmd.arg("PX").arg(Self::expiration_millis(ttl));
            }
        cmd.query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Set {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        redis::cmd("DEL")
            .arg(key)
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Deleted {}", key);
        Ok(())
    }

    async fn reset_all(&self) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        redis::cmd("FLUSHDB")
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        info!("[Redis] Flushed {}", self.address);
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        if self.connection.lock().take().is_some() {
            info!("[Redis] Closed connection to {}", self.address);
        }
        Ok(())
    }
}
