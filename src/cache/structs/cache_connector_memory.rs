use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct MemoryEntry {
    pub(crate) value: String,
    pub(crate) expires_at: Option<Instant>,
    pub(crate) sequence: u64,
}

#[derive(Debug)]
pub struct CacheConnectorMemory {
    pub(crate) entries: Mutex<AHashMap<String, MemoryEntry>>,
    pub(crate) max_entries: Option<usize>,
    pub(crate) sequence: AtomicU64,
}
