//! Service configuration from environment variables.

use crate::adapters::DEFAULT_EVENT_CAPACITY;
use std::env;
use std::path::PathBuf;

/// Where claims are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local table; lost on exit.
    Memory,
    /// RocksDB database at the given path (requires the `rocksdb` feature).
    RocksDb(PathBuf),
}

/// Configuration for the handle service.
#[derive(Debug, Clone)]
pub struct HandlesConfig {
    /// Claim storage backend.
    pub storage: StorageBackend,
    /// Events buffered per subscriber.
    pub event_capacity: usize,
    /// fsync after each durable write.
    pub sync_writes: bool,
}

impl Default for HandlesConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Memory,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            sync_writes: true,
        }
    }
}

impl HandlesConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PH_STORAGE`: `memory` or `rocksdb` (default: memory)
    /// - `PH_STORAGE_PATH`: RocksDB directory (default: ./data/handles)
    /// - `PH_EVENT_CAPACITY`: events buffered per subscriber (default: 256)
    /// - `PH_SYNC_WRITES`: fsync durable writes (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let path = lookup("PH_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/handles"));

        let storage = match lookup("PH_STORAGE").map(|v| v.to_lowercase()).as_deref() {
            Some("rocksdb") => StorageBackend::RocksDb(path),
            _ => StorageBackend::Memory,
        };

        Self {
            storage,
            event_capacity: lookup("PH_EVENT_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.event_capacity),
            sync_writes: lookup("PH_SYNC_WRITES")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.sync_writes),
        }
    }
}
