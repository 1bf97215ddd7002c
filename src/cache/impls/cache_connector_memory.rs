use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memory::{CacheConnectorMemory, MemoryEntry};
use crate::cache::traits::cache_backend::CacheBackend;
use ahash::AHashMap;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(expires_at) if expires_at <= now)
    }
}

impl CacheConnectorMemory {
    pub fn new(max_entries: Option<usize>) -> Self {
        Self {
            entries: Mutex::new(AHashMap::new()),
            max_entries,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    // Caller holds the lock. Expired entries go first, then the oldest insert.
    fn make_room(entries: &mut AHashMap<String, MemoryEntry>, max_entries: usize) {
        if entries.len() < max_entries {
            return;
        }
        let now = Instant::now();
        entries.retain(|_, entry| !entry.is_expired(now));
        while entries.len() >= max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.sequence)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    entries.remove(&key);
                    debug!("[Memory] Evicted {}", key);
                }
                None => break,
            }
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock();
        let now = Instant::now();
        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let entry = MemoryEntry {
            value: value.to_string(),
            expires_at: ttl
                .filter(|ttl| !ttl.is_zero())
                .and_then(|ttl| Instant::now().checked_add(ttl)),
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
        };
        let mut entries = self.entries.lock();
        if let Some(max_entries) = self.max_entries
            && !entries.contains_key(key) {
                Self::make_room(&mut entries, max_entries);
            }
        entries.insert(key.to_string(), entry);
        debug!("[Memory] Set {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().remove(key);
        debug!("[Memory] Deleted {}", key);
        Ok(())
    }

    async fn reset_all(&self) -> Result<(), CacheError> {
        self.entries.lock().clear();
        debug!("[Memory] Reset");
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
