use crate::cache::enums::cache_engine::CacheEngine;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::store_config::StoreConfig;
use std::time::Duration;

impl StoreConfig {
    pub fn memory() -> StoreConfig {
        StoreConfig::default()
    }

    pub fn redis(host: &str, port: u16) -> StoreConfig {
        StoreConfig {
            engine: CacheEngine::redis,
            host: Some(host.to_string()),
            port: Some(port),
            ..Default::default()
        }
    }

    pub fn memcached(host: &str, port: u16) -> StoreConfig {
        StoreConfig {
            engine: CacheEngine::memcached,
            host: Some(host.to_string()),
            port: Some(port),
            ..Default::default()
        }
    }

    pub fn multi(stores: Vec<StoreConfig>) -> StoreConfig {
        StoreConfig {
            engine: CacheEngine::multi,
            stores,
            ..Default::default()
        }
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.ttl.map(Duration::from_secs)
    }

    /// Connection url for network engines; an explicit `url` wins over host/port.
    pub fn connection_url(&self) -> Option<String> {
        let scheme = self.engine.url_scheme()?;
        if let Some(url) = &self.url {
            return Some(url.clone());
        }
        let host = self.host.as_deref().unwrap_or("127.0.0.1");
        let port = self.port.or(self.engine.default_port())?;
        match self.engine {
            CacheEngine::redis => {
                let auth = match &self.password {
                    Some(password) => format!(":{}@", password),
                    None => String::new(),
                };
                Some(format!("{}{}{}:{}/{}", scheme, auth, host, port, self.db.unwrap_or(0)))
            }
            _ => Some(format!("{}{}:{}", scheme, host, port)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.configure.is_empty() && self.engine != CacheEngine::redis {
            return Err(ConfigurationError::InvalidStore(format!(
                "'configure' is only supported by redis stores, not {}",
                self.engine
            )));
        }
        if !self.stores.is_empty() && self.engine != CacheEngine::multi {
            return Err(ConfigurationError::InvalidStore(format!(
                "'stores' is only supported by multi stores, not {}",
                self.engine
            )));
        }
        if self.max == Some(0) {
            return Err(ConfigurationError::InvalidStore("'max' must be greater than zero".to_string()));
        }
        if self.ttl == Some(0) {
            return Err(ConfigurationError::InvalidStore("'ttl' must be greater than zero".to_string()));
        }
        match self.engine {
            CacheEngine::multi => {
                if self.stores.is_empty() {
                    return Err(ConfigurationError::InvalidStore("multi store needs at least one member".to_string()));
                }
                for store in &self.stores {
                    store.validate()?;
                }
                Ok(())
            }
            CacheEngine::redis => {
                let url = self.connection_url().unwrap_or_default();
                redis::Client::open(url.as_str())
                    .map(|_| ())
                    .map_err(|e| ConfigurationError::InvalidStore(format!("{}: {}", url, e)))
            }
            CacheEngine::memory | CacheEngine::memcached => Ok(()),
        }
    }
}
