//! Project Registry Adapter
//!
//! Implements `ProjectRegistry` port with an in-memory owner table.

use crate::domain::{Address, HandleError, ProjectId};
use crate::ports::outbound::ProjectRegistry;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory project registry.
///
/// Project IDs are issued sequentially starting at 1.
pub struct InMemoryProjectRegistry {
    inner: RwLock<RegistryState>,
}

struct RegistryState {
    owners: HashMap<ProjectId, Address>,
    next_id: u64,
}

impl InMemoryProjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryState {
                owners: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Register a new project owned by `owner`.
    pub fn create(&self, owner: Address) -> ProjectId {
        let mut state = self.inner.write();
        let project_id = ProjectId::new(state.next_id);
        state.next_id += 1;
        state.owners.insert(project_id, owner);
        debug!(%project_id, %owner, "Project created");
        project_id
    }

    /// Move ownership of `project_id` to `new_owner`.
    pub fn transfer(&self, project_id: ProjectId, new_owner: Address) -> Result<(), HandleError> {
        let mut state = self.inner.write();
        let owner = state
            .owners
            .get_mut(&project_id)
            .ok_or(HandleError::ProjectNotFound(project_id))?;
        *owner = new_owner;
        debug!(%project_id, %new_owner, "Project transferred");
        Ok(())
    }

    /// Number of registered projects.
    pub fn count(&self) -> usize {
        self.inner.read().owners.len()
    }
}

impl Default for InMemoryProjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRegistry for InMemoryProjectRegistry {
    fn owner_of(&self, project_id: ProjectId) -> Result<Address, HandleError> {
        self.inner
            .read()
            .owners
            .get(&project_id)
            .copied()
            .ok_or(HandleError::ProjectNotFound(project_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_issues_sequential_ids() {
        let registry = InMemoryProjectRegistry::new();
        let a = registry.create(Address::new([1; 20]));
        let b = registry.create(Address::new([2; 20]));
        assert_eq!(a, ProjectId::new(1));
        assert_eq!(b, ProjectId::new(2));
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_owner_of() {
        let registry = InMemoryProjectRegistry::new();
        let id = registry.create(Address::new([1; 20]));
        assert_eq!(registry.owner_of(id).unwrap(), Address::new([1; 20]));
    }

    #[test]
    fn test_owner_of_unknown_project() {
        let registry = InMemoryProjectRegistry::new();
        let result = registry.owner_of(ProjectId::new(99));
        assert!(matches!(result, Err(HandleError::ProjectNotFound(id)) if id.get() == 99));
    }

    #[test]
    fn test_transfer() {
        let registry = InMemoryProjectRegistry::new();
        let id = registry.create(Address::new([1; 20]));
        registry.transfer(id, Address::new([2; 20])).unwrap();
        assert_eq!(registry.owner_of(id).unwrap(), Address::new([2; 20]));
    }

    #[test]
    fn test_transfer_unknown_project() {
        let registry = InMemoryProjectRegistry::new();
        assert!(registry
            .transfer(ProjectId::new(5), Address::new([2; 20]))
            .is_err());
    }
}
