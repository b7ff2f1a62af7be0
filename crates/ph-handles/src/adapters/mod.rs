//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for the handle service.

mod claim_store;
mod event_bus;
mod permission_store;
mod project_registry;
#[cfg(feature = "rocksdb")]
mod rocksdb_store;
mod text_resolver;

pub use claim_store::InMemoryClaimStore;
pub use event_bus::{InMemoryHandleEventBus, DEFAULT_EVENT_CAPACITY};
pub use permission_store::{pack_permissions, InMemoryPermissionStore};
pub use project_registry::InMemoryProjectRegistry;
#[cfg(feature = "rocksdb")]
pub use rocksdb_store::{RocksDbClaimStore, RocksDbConfig, CF_CLAIMS};
pub use text_resolver::InMemoryTextResolver;

use crate::config::{HandlesConfig, StorageBackend};
use crate::domain::HandleError;
use crate::ports::outbound::ClaimStore;

/// Open the claim store selected by `config`.
pub fn open_claim_store(config: &HandlesConfig) -> Result<Box<dyn ClaimStore>, HandleError> {
    match &config.storage {
        StorageBackend::Memory => Ok(Box::new(InMemoryClaimStore::new())),
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb(path) => {
            let rocks = RocksDbConfig {
                path: path.clone(),
                sync_writes: config.sync_writes,
                ..Default::default()
            };
            Ok(Box::new(RocksDbClaimStore::open(rocks)?))
        }
        #[cfg(not(feature = "rocksdb"))]
        StorageBackend::RocksDb(path) => Err(HandleError::StorageError(format!(
            "cannot open {}: built without the rocksdb feature",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NameRecord, ProjectId};

    #[test]
    fn test_open_memory_store() {
        let store = open_claim_store(&HandlesConfig::default()).unwrap();
        store.put(ProjectId::new(1), NameRecord::new("alice")).unwrap();
        assert_eq!(
            store.get(ProjectId::new(1)).unwrap(),
            Some(NameRecord::new("alice"))
        );
    }

    #[cfg(not(feature = "rocksdb"))]
    #[test]
    fn test_open_rocksdb_without_feature_fails() {
        let config = HandlesConfig {
            storage: StorageBackend::RocksDb("/tmp/unused".into()),
            ..Default::default()
        };
        assert!(matches!(
            open_claim_store(&config),
            Err(HandleError::StorageError(_))
        ));
    }
}
