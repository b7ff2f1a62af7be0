//! Claim Store Adapter
//!
//! Implements `ClaimStore` port in memory.

use crate::domain::{HandleError, NameRecord, ProjectId};
use crate::ports::outbound::ClaimStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory claim table.
pub struct InMemoryClaimStore {
    claims: RwLock<HashMap<ProjectId, NameRecord>>,
}

impl InMemoryClaimStore {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            claims: RwLock::new(HashMap::new()),
        }
    }

    /// Number of projects that ever had a claim written.
    pub fn len(&self) -> usize {
        self.claims.read().len()
    }

    /// True if no claim was ever written.
    pub fn is_empty(&self) -> bool {
        self.claims.read().is_empty()
    }
}

impl Default for InMemoryClaimStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimStore for InMemoryClaimStore {
    fn get(&self, project_id: ProjectId) -> Result<Option<NameRecord>, HandleError> {
        Ok(self.claims.read().get(&project_id).cloned())
    }

    fn put(&self, project_id: ProjectId, record: NameRecord) -> Result<(), HandleError> {
        self.claims.write().insert(project_id, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_claim() {
        let store = InMemoryClaimStore::new();
        assert_eq!(store.get(ProjectId::new(1)).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_overwrites() {
        let store = InMemoryClaimStore::new();
        let id = ProjectId::new(1);
        store.put(id, NameRecord::new("alice")).unwrap();
        store
            .put(id, NameRecord::with_subdomain("bob", "proj"))
            .unwrap();
        assert_eq!(
            store.get(id).unwrap(),
            Some(NameRecord::with_subdomain("bob", "proj"))
        );
        assert_eq!(store.len(), 1);
    }
}
