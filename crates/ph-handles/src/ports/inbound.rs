//! # Inbound Ports
//!
//! API trait defining what the handle service offers its callers.

use crate::domain::{Address, HandleError, NameRecord, ProjectId};

/// Project handles API - inbound port.
pub trait ProjectHandlesApi: Send + Sync {
    /// Claim `name` (no subdomain) for `project_id`.
    ///
    /// Requires `caller` to own the project or hold the set-handle permission
    /// in the owner's domain.
    fn set_name(
        &self,
        caller: Address,
        project_id: ProjectId,
        name: &str,
    ) -> Result<(), HandleError>;

    /// Claim `subdomain.name` for `project_id`. Same authorization as
    /// [`ProjectHandlesApi::set_name`].
    fn set_name_with_subdomain(
        &self,
        caller: Address,
        project_id: ProjectId,
        name: &str,
        subdomain: &str,
    ) -> Result<(), HandleError>;

    /// Current claim of `project_id`; the unset record if none was written.
    fn record_of(&self, project_id: ProjectId) -> Result<NameRecord, HandleError>;

    /// Verified handle of `project_id`, or an empty string.
    fn handle_of(&self, project_id: ProjectId) -> Result<String, HandleError>;

    /// Attribute key used for reverse-record lookups.
    fn text_key(&self) -> &'static str;
}
