//! # Project Handles Service
//!
//! Wires the access guard, the claim store and the reverse verifier together
//! behind [`ProjectHandlesApi`].
//!
//! ## Write path
//!
//! ```text
//! caller ──→ access guard ──→ claim store ──→ event bus
//!            (owner | delegate)  (overwrite)    (HandleSet)
//! ```
//!
//! ## Read path
//!
//! ```text
//! handle_of ──→ claim store ──→ namehash ──→ resolver.text(node, TEXT_KEY)
//!                                               │
//!                          display ←── match ←──┘ parse == project_id
//! ```
//!
//! Writes are serialized through one lock and either commit record and event
//! together or change nothing. Reads take no service lock and query the
//! resolver live on every call.

use crate::domain::{
    invariant_authorized_writer, invariant_reverse_pointer_matches, namehash_record, Address,
    HandleError, NameRecord, PermissionIndex, ProjectId, SET_HANDLE_PERMISSION, TEXT_KEY,
};
use crate::events::HandleEvent;
use crate::ports::inbound::ProjectHandlesApi;
use crate::ports::outbound::{
    ClaimStore, HandleEventPublisher, PermissionStore, ProjectRegistry, TextResolver,
};
use parking_lot::{Mutex, RwLock};
use ph_telemetry::metrics::{lookup_outcome, write_kind};
use ph_telemetry::{
    HistogramTimer, HANDLE_LOOKUPS, HANDLE_WRITES, HANDLE_WRITES_REJECTED, VERIFICATION_DURATION,
};
use tracing::{debug, info, instrument, warn};

/// Statistics for the handle service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HandleServiceStats {
    /// Claim writes committed.
    pub writes_committed: u64,
    /// Claim writes rejected as unauthorized.
    pub writes_rejected: u64,
    /// `handle_of` calls answered.
    pub lookups: u64,
    /// Lookups that returned a verified handle.
    pub verified_lookups: u64,
}

/// Outcome of checking a claim against its reverse record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Project has no claim.
    Unset,
    /// Reverse record points back at the project.
    Verified(String),
    /// Reverse record is absent, unparseable or names another project.
    Mismatch,
}

impl Verification {
    /// Handle text the caller sees; empty unless verified.
    #[must_use]
    pub fn into_handle(self) -> String {
        match self {
            Verification::Verified(handle) => handle,
            Verification::Unset | Verification::Mismatch => String::new(),
        }
    }

    fn metric_label(&self) -> &'static str {
        match self {
            Verification::Unset => lookup_outcome::UNSET,
            Verification::Verified(_) => lookup_outcome::VERIFIED,
            Verification::Mismatch => lookup_outcome::MISMATCH,
        }
    }
}

/// The project handle service.
///
/// Generic over its collaborators so production adapters and in-memory test
/// doubles plug in the same way.
pub struct ProjectHandlesService<R, P, N, S, E>
where
    R: ProjectRegistry,
    P: PermissionStore,
    N: TextResolver,
    S: ClaimStore,
    E: HandleEventPublisher,
{
    registry: R,
    permissions: P,
    resolver: N,
    claims: S,
    events: E,
    /// Serializes writes so authorize, store and publish happen as one unit.
    write_lock: Mutex<()>,
    stats: RwLock<HandleServiceStats>,
}

impl<R, P, N, S, E> ProjectHandlesService<R, P, N, S, E>
where
    R: ProjectRegistry,
    P: PermissionStore,
    N: TextResolver,
    S: ClaimStore,
    E: HandleEventPublisher,
{
    /// Create a new service over the given collaborators.
    pub fn new(registry: R, permissions: P, resolver: N, claims: S, events: E) -> Self {
        Self {
            registry,
            permissions,
            resolver,
            claims,
            events,
            write_lock: Mutex::new(()),
            stats: RwLock::new(HandleServiceStats::default()),
        }
    }

    /// Current service statistics.
    pub fn stats(&self) -> HandleServiceStats {
        self.stats.read().clone()
    }

    /// Whether `caller` may perform `permission` on `project_id`.
    ///
    /// The owner always may; anyone else needs `permission` granted within
    /// the owner's domain. Registry and permission store errors propagate.
    pub fn is_authorized(
        &self,
        caller: &Address,
        project_id: ProjectId,
        permission: PermissionIndex,
    ) -> Result<bool, HandleError> {
        let owner = self.registry.owner_of(project_id)?;
        if caller == &owner {
            return Ok(true);
        }
        let delegated = self.permissions.has_permission(caller, &owner, permission)?;
        Ok(invariant_authorized_writer(caller, &owner, delegated))
    }

    /// Check the claim of `project_id` against the naming system.
    ///
    /// Resolver failures propagate; bad reverse-record contents do not.
    pub fn verify(&self, project_id: ProjectId) -> Result<Verification, HandleError> {
        let record = self.load_record(project_id)?;
        if record.is_unset() {
            return Ok(Verification::Unset);
        }

        let _timer = HistogramTimer::new(&VERIFICATION_DURATION);
        let node = namehash_record(&record);
        let pointer = self.resolver.text_record(&node, TEXT_KEY)?;

        if invariant_reverse_pointer_matches(&pointer, project_id) {
            Ok(Verification::Verified(record.display()))
        } else {
            debug!(%project_id, %node, pointer = %pointer, "Reverse record does not match claim");
            Ok(Verification::Mismatch)
        }
    }

    fn load_record(&self, project_id: ProjectId) -> Result<NameRecord, HandleError> {
        Ok(self.claims.get(project_id)?.unwrap_or_default())
    }

    fn write_claim(
        &self,
        caller: Address,
        project_id: ProjectId,
        record: NameRecord,
        kind: &'static str,
    ) -> Result<(), HandleError> {
        let _guard = self.write_lock.lock();

        if !self.is_authorized(&caller, project_id, SET_HANDLE_PERMISSION)? {
            warn!(%caller, %project_id, "Rejected unauthorized handle write");
            self.stats.write().writes_rejected += 1;
            HANDLE_WRITES_REJECTED.inc();
            return Err(HandleError::Unauthorized { caller, project_id });
        }

        let handle = record.display();
        self.claims.put(project_id, record)?;

        let receivers = self.events.publish(HandleEvent::HandleSet {
            project_id,
            display: handle.clone(),
            caller,
        });

        self.stats.write().writes_committed += 1;
        HANDLE_WRITES.with_label_values(&[kind]).inc();
        info!(%project_id, %caller, handle = %handle, receivers, "Handle claim set");
        Ok(())
    }
}

impl<R, P, N, S, E> ProjectHandlesApi for ProjectHandlesService<R, P, N, S, E>
where
    R: ProjectRegistry,
    P: PermissionStore,
    N: TextResolver,
    S: ClaimStore,
    E: HandleEventPublisher,
{
    #[instrument(skip_all, fields(project_id = %project_id))]
    fn set_name(
        &self,
        caller: Address,
        project_id: ProjectId,
        name: &str,
    ) -> Result<(), HandleError> {
        self.write_claim(caller, project_id, NameRecord::new(name), write_kind::NAME)
    }

    #[instrument(skip_all, fields(project_id = %project_id))]
    fn set_name_with_subdomain(
        &self,
        caller: Address,
        project_id: ProjectId,
        name: &str,
        subdomain: &str,
    ) -> Result<(), HandleError> {
        self.write_claim(
            caller,
            project_id,
            NameRecord::with_subdomain(name, subdomain),
            write_kind::NAME_WITH_SUBDOMAIN,
        )
    }

    fn record_of(&self, project_id: ProjectId) -> Result<NameRecord, HandleError> {
        self.load_record(project_id)
    }

    #[instrument(skip_all, fields(project_id = %project_id))]
    fn handle_of(&self, project_id: ProjectId) -> Result<String, HandleError> {
        let verification = self.verify(project_id)?;

        HANDLE_LOOKUPS
            .with_label_values(&[verification.metric_label()])
            .inc();
        {
            let mut stats = self.stats.write();
            stats.lookups += 1;
            if matches!(verification, Verification::Verified(_)) {
                stats.verified_lookups += 1;
            }
        }

        Ok(verification.into_handle())
    }

    fn text_key(&self) -> &'static str {
        TEXT_KEY
    }
}
