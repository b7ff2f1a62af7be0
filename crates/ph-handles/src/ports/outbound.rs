//! # Outbound Ports
//!
//! Traits for external dependencies: the project registry, the permission
//! store, the naming resolver, claim persistence and event publishing.
//!
//! All calls are synchronous. A port error aborts the calling operation as a
//! whole.

use crate::domain::{Address, HandleError, NameRecord, Node, PermissionIndex, ProjectId};
use crate::events::HandleEvent;

/// Project registry - outbound port.
///
/// Owns project IDs and their current owner.
pub trait ProjectRegistry: Send + Sync {
    /// Current owner of `project_id`.
    ///
    /// Fails with [`HandleError::ProjectNotFound`] for unknown IDs.
    fn owner_of(&self, project_id: ProjectId) -> Result<Address, HandleError>;
}

/// Permission store - outbound port.
///
/// Delegated capabilities granted by an owner (`domain`) to another address.
pub trait PermissionStore: Send + Sync {
    /// Whether `delegate` holds `permission` within `domain`.
    fn has_permission(
        &self,
        delegate: &Address,
        domain: &Address,
        permission: PermissionIndex,
    ) -> Result<bool, HandleError>;
}

/// Naming resolver - outbound port.
///
/// Key-value text lookup keyed by node and attribute key.
pub trait TextResolver: Send + Sync {
    /// Text value stored under (`node`, `key`); empty when unset.
    fn text_record(&self, node: &Node, key: &str) -> Result<String, HandleError>;
}

/// Claim persistence - outbound port.
///
/// One record per project; absent entries read as the unset record.
pub trait ClaimStore: Send + Sync {
    /// Stored claim, or `None` if the project never had one written.
    fn get(&self, project_id: ProjectId) -> Result<Option<NameRecord>, HandleError>;

    /// Overwrites the claim of `project_id`.
    fn put(&self, project_id: ProjectId, record: NameRecord) -> Result<(), HandleError>;
}

/// Event sink - outbound port.
pub trait HandleEventPublisher: Send + Sync {
    /// Publish an event; returns the number of subscribers that received it.
    fn publish(&self, event: HandleEvent) -> usize;
}

// =============================================================================
// Forwarding impls for shared (`Arc`) and boxed adapters
// =============================================================================

impl<T: ProjectRegistry + ?Sized> ProjectRegistry for std::sync::Arc<T> {
    fn owner_of(&self, project_id: ProjectId) -> Result<Address, HandleError> {
        (**self).owner_of(project_id)
    }
}

impl<T: PermissionStore + ?Sized> PermissionStore for std::sync::Arc<T> {
    fn has_permission(
        &self,
        delegate: &Address,
        domain: &Address,
        permission: PermissionIndex,
    ) -> Result<bool, HandleError> {
        (**self).has_permission(delegate, domain, permission)
    }
}

impl<T: TextResolver + ?Sized> TextResolver for std::sync::Arc<T> {
    fn text_record(&self, node: &Node, key: &str) -> Result<String, HandleError> {
        (**self).text_record(node, key)
    }
}

impl<T: ClaimStore + ?Sized> ClaimStore for std::sync::Arc<T> {
    fn get(&self, project_id: ProjectId) -> Result<Option<NameRecord>, HandleError> {
        (**self).get(project_id)
    }

    fn put(&self, project_id: ProjectId, record: NameRecord) -> Result<(), HandleError> {
        (**self).put(project_id, record)
    }
}

impl<T: ClaimStore + ?Sized> ClaimStore for Box<T> {
    fn get(&self, project_id: ProjectId) -> Result<Option<NameRecord>, HandleError> {
        (**self).get(project_id)
    }

    fn put(&self, project_id: ProjectId, record: NameRecord) -> Result<(), HandleError> {
        (**self).put(project_id, record)
    }
}

impl<T: HandleEventPublisher + ?Sized> HandleEventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: HandleEvent) -> usize {
        (**self).publish(event)
    }
}
