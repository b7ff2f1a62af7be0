//! Permission Store Adapter
//!
//! Implements `PermissionStore` port. Each (domain, delegate) pair maps to a
//! 256-bit set where bit `i` grants permission index `i`.

use crate::domain::{Address, HandleError, PermissionIndex};
use crate::ports::outbound::PermissionStore;
use parking_lot::RwLock;
use primitive_types::U256;
use std::collections::HashMap;
use tracing::debug;

/// Packs permission indices into a 256-bit set.
#[must_use]
pub fn pack_permissions(indices: &[PermissionIndex]) -> U256 {
    indices
        .iter()
        .fold(U256::zero(), |packed, index| packed | (U256::one() << *index))
}

/// In-memory permission store.
pub struct InMemoryPermissionStore {
    /// (domain, delegate) -> packed permission set.
    grants: RwLock<HashMap<(Address, Address), U256>>,
}

impl InMemoryPermissionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            grants: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the whole permission set `domain` grants to `delegate`.
    ///
    /// Passing an empty slice revokes everything.
    pub fn set_permissions(&self, domain: Address, delegate: Address, indices: &[PermissionIndex]) {
        let packed = pack_permissions(indices);
        debug!(%domain, %delegate, ?indices, "Permissions set");
        let mut grants = self.grants.write();
        if packed.is_zero() {
            grants.remove(&(domain, delegate));
        } else {
            grants.insert((domain, delegate), packed);
        }
    }

    /// Grant or revoke a single permission index, leaving the rest untouched.
    pub fn set_permission(
        &self,
        domain: Address,
        delegate: Address,
        index: PermissionIndex,
        granted: bool,
    ) {
        let mut grants = self.grants.write();
        let bit = U256::one() << index;
        let packed = grants.entry((domain, delegate)).or_insert_with(U256::zero);
        if granted {
            *packed = *packed | bit;
        } else {
            *packed = *packed & !bit;
        }
        if packed.is_zero() {
            grants.remove(&(domain, delegate));
        }
    }

    /// Packed permission set `domain` grants to `delegate`.
    pub fn permissions_of(&self, domain: &Address, delegate: &Address) -> U256 {
        self.grants
            .read()
            .get(&(*domain, *delegate))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for InMemoryPermissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionStore for InMemoryPermissionStore {
    fn has_permission(
        &self,
        delegate: &Address,
        domain: &Address,
        permission: PermissionIndex,
    ) -> Result<bool, HandleError> {
        Ok(self.permissions_of(domain, delegate).bit(usize::from(permission)))
    }
}
