//! # Domain Errors
//!
//! Error types for Project Handles.
//!
//! "No claim" and "claim not verified" are not errors: both resolve to an
//! empty handle. Only rejected writes and collaborator failures surface here.

use super::value_objects::{Address, ProjectId};
use thiserror::Error;

/// Project handle error types.
#[derive(Debug, Error)]
pub enum HandleError {
    /// Caller is neither the project owner nor a delegate holding the
    /// set-handle permission in the owner's domain.
    #[error("Unauthorized: {caller} may not set the handle of project {project_id}")]
    Unauthorized {
        /// Address that attempted the write.
        caller: Address,
        /// Target project.
        project_id: ProjectId,
    },

    /// Project does not exist in the registry.
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Naming resolver failed to answer.
    #[error("Resolver error: {0}")]
    ResolverError(String),

    /// Claim storage failed.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Persisted claim could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HandleError {
    fn from(err: serde_json::Error) -> Self {
        HandleError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_error() {
        let err = HandleError::Unauthorized {
            caller: Address::new([0xAB; 20]),
            project_id: ProjectId::new(7),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unauthorized"));
        assert!(msg.contains("project 7"));
    }

    #[test]
    fn test_project_not_found_error() {
        let err = HandleError::ProjectNotFound(ProjectId::new(42));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let err: HandleError = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert!(matches!(err, HandleError::Serialization(_)));
    }
}
