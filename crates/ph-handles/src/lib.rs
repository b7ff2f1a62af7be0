//! # Project Handles
//!
//! Verified naming-system handles for registered projects.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A project owner may claim any name for their project, but the claim is only
//! returned as a handle once the naming system agrees: the name's reverse text
//! record (`TEXT_KEY`) must hold the same project ID.
//!
//! | Direction | Controlled by | Stored in |
//! |-----------|---------------|-----------|
//! | project → name | project owner or delegate | `ClaimStore` |
//! | name → project | name owner | naming resolver text record |
//!
//! A name is the handle of project P iff both directions agree. Anything else
//! (no claim, no record, garbage, another project's ID) resolves to `""`.
//!
//! ## Module Structure
//!
//! ```text
//! ph-handles/
//! ├── domain/      # NameRecord, ProjectId, Node, namehash, invariants, errors
//! ├── ports/       # ProjectHandlesApi, registry/permission/resolver/store ports
//! ├── adapters/    # In-memory and RocksDB adapters, event bus
//! ├── events.rs    # HandleEvent
//! ├── config.rs    # HandlesConfig
//! └── service.rs   # ProjectHandlesService
//! ```
//!
//! ## Usage Example
//!
//! ```ignore
//! use ph_handles::prelude::*;
//!
//! let registry = InMemoryProjectRegistry::new();
//! let owner = Address::new([1; 20]);
//! let project = registry.create(owner);
//!
//! let service = ProjectHandlesService::new(
//!     registry,
//!     InMemoryPermissionStore::new(),
//!     resolver,
//!     InMemoryClaimStore::new(),
//!     InMemoryHandleEventBus::new(),
//! );
//!
//! service.set_name_with_subdomain(owner, project, "alice", "proj")?;
//! assert_eq!(service.handle_of(project)?, "proj.alice");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    open_claim_store, pack_permissions, InMemoryClaimStore, InMemoryHandleEventBus,
    InMemoryPermissionStore, InMemoryProjectRegistry, InMemoryTextResolver,
};
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbClaimStore, RocksDbConfig};
pub use config::{HandlesConfig, StorageBackend};
pub use domain::{
    invariant_authorized_writer, invariant_reverse_pointer_matches, namehash, namehash_record,
    parse_reverse_pointer, Address, HandleError, NameRecord, Node, PermissionIndex, ProjectId,
    SET_HANDLE_PERMISSION, TEXT_KEY,
};
pub use events::{HandleEvent, HandleTopic};
pub use ports::{
    ClaimStore, HandleEventPublisher, PermissionStore, ProjectHandlesApi, ProjectRegistry,
    TextResolver,
};
pub use service::{HandleServiceStats, ProjectHandlesService, Verification};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed to wire up and call the service.
pub mod prelude {
    pub use crate::adapters::*;
    pub use crate::config::{HandlesConfig, StorageBackend};
    pub use crate::domain::{
        namehash, Address, HandleError, NameRecord, Node, ProjectId, SET_HANDLE_PERMISSION,
        TEXT_KEY,
    };
    pub use crate::events::HandleEvent;
    pub use crate::ports::*;
    pub use crate::service::{ProjectHandlesService, Verification};
}

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
