//! # Event Schema
//!
//! Change notifications published after every committed claim write.
//!
//! | Event | Published by | When |
//! |-------|--------------|------|
//! | `HandleSet` | `set_name`, `set_name_with_subdomain` | After the record is stored |
//!
//! Unclaims (writes with an empty name) publish too.

use crate::domain::{Address, ProjectId};
use serde::{Deserialize, Serialize};

/// Topic for routing handle events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleTopic {
    /// Claim writes.
    HandleSet,
}

/// Events emitted by the handle service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleEvent {
    /// A project's claimed name changed.
    HandleSet {
        /// Project whose claim changed.
        project_id: ProjectId,
        /// Composed display string of the new claim.
        display: String,
        /// Address that performed the write.
        caller: Address,
    },
}

impl HandleEvent {
    /// Topic of this event.
    #[must_use]
    pub fn topic(&self) -> HandleTopic {
        match self {
            HandleEvent::HandleSet { .. } => HandleTopic::HandleSet,
        }
    }

    /// Project the event is about.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        match self {
            HandleEvent::HandleSet { project_id, .. } => *project_id,
        }
    }
}
