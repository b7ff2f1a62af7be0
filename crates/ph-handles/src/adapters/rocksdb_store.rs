//! # RocksDB Claim Store
//!
//! Durable `ClaimStore` backed by RocksDB.
//!
//! Records are stored as JSON under `claim:<project_id>` in a dedicated
//! `claims` column family.

use crate::domain::{HandleError, NameRecord, ProjectId};
use crate::ports::outbound::ClaimStore;
use rocksdb::{ColumnFamilyDescriptor, Options, WriteOptions, DB};
use std::path::PathBuf;
use tracing::info;

/// Column family holding claims.
pub const CF_CLAIMS: &str = "claims";

/// RocksDB configuration.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory.
    pub path: PathBuf,
    /// Block cache size in bytes (default: 32MB).
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 16MB).
    pub write_buffer_size: usize,
    /// fsync after each write (default: true).
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/handles"),
            block_cache_size: 32 * 1024 * 1024,
            write_buffer_size: 16 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Config for tests: small buffers, no fsync.
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 4 * 1024 * 1024,
            write_buffer_size: 1024 * 1024,
            sync_writes: false,
        }
    }
}

/// RocksDB-backed claim table.
pub struct RocksDbClaimStore {
    db: DB,
    config: RocksDbConfig,
}

fn claim_key(project_id: ProjectId) -> Vec<u8> {
    format!("claim:{}", project_id.get()).into_bytes()
}

impl RocksDbClaimStore {
    /// Open or create the database at `config.path`.
    pub fn open(config: RocksDbConfig) -> Result<Self, HandleError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let cf = ColumnFamilyDescriptor::new(CF_CLAIMS, Options::default());
        let db = DB::open_cf_descriptors(&opts, &config.path, vec![cf])
            .map_err(|e| HandleError::StorageError(format!("Failed to open RocksDB: {}", e)))?;

        info!(path = %config.path.display(), "Claim store opened");
        Ok(Self { db, config })
    }

    fn claims_cf(&self) -> Result<&rocksdb::ColumnFamily, HandleError> {
        self.db.cf_handle(CF_CLAIMS).ok_or_else(|| {
            HandleError::StorageError(format!("missing column family {}", CF_CLAIMS))
        })
    }
}

impl ClaimStore for RocksDbClaimStore {
    fn get(&self, project_id: ProjectId) -> Result<Option<NameRecord>, HandleError> {
        let cf = self.claims_cf()?;
        let raw = self
            .db
            .get_cf(cf, claim_key(project_id))
            .map_err(|e| HandleError::StorageError(format!("RocksDB get failed: {}", e)))?;
        raw.map(|bytes| serde_json::from_slice(&bytes).map_err(HandleError::from))
            .transpose()
    }

    fn put(&self, project_id: ProjectId, record: NameRecord) -> Result<(), HandleError> {
        let cf = self.claims_cf()?;
        let value = serde_json::to_vec(&record)?;
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);
        self.db
            .put_cf_opt(cf, claim_key(project_id), value, &write_opts)
            .map_err(|e| HandleError::StorageError(format!("RocksDB put failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_claim_key_format() {
        assert_eq!(claim_key(ProjectId::new(12)), b"claim:12".to_vec());
    }

    #[test]
    fn test_put_get() {
        let dir = TempDir::new().unwrap();
        let store = RocksDbClaimStore::open(RocksDbConfig::for_testing(dir.path())).unwrap();
        let id = ProjectId::new(1);

        assert_eq!(store.get(id).unwrap(), None);
        store
            .put(id, NameRecord::with_subdomain("alice", "proj"))
            .unwrap();
        assert_eq!(
            store.get(id).unwrap(),
            Some(NameRecord::with_subdomain("alice", "proj"))
        );
    }

    #[test]
    fn test_claims_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = RocksDbClaimStore::open(RocksDbConfig::for_testing(dir.path())).unwrap();
            store.put(ProjectId::new(4), NameRecord::new("alice")).unwrap();
        }
        let store = RocksDbClaimStore::open(RocksDbConfig::for_testing(dir.path())).unwrap();
        assert_eq!(
            store.get(ProjectId::new(4)).unwrap(),
            Some(NameRecord::new("alice"))
        );
    }
}
