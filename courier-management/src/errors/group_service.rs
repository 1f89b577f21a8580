//! Management service error types.
//!
//! This module defines the unified error type for all group management
//! operations, covering repository failures, malformed patches, audit
//! failures, and the existence guard.

use courier_management_repository::GroupRepositoryError;
use courier_management_shared::PatchError;
use thiserror::Error;

use crate::errors::AuditError;

/// Unified errors from group management operations.
///
/// Used by `GroupService` for all management operations. Repository and
/// audit errors pass through unchanged so callers can react to the
/// underlying condition; `GroupNotExists` and `MalformedPatch` originate in
/// the service itself.
#[derive(Debug, Clone, Error)]
pub enum GroupServiceError {
    /// The group repository rejected or failed the operation.
    #[error("Group repository error: {0}")]
    Repository(#[from] GroupRepositoryError),

    /// The existence guard found no group under the requested name.
    #[error("Group does not exist: {0}")]
    GroupNotExists(String),

    /// The submitted patch failed validation against the group schema.
    #[error("Malformed patch: {0}")]
    MalformedPatch(#[from] PatchError),

    /// The audit trail could not record a successful mutation.
    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),
}

impl GroupServiceError {
    /// Create a group-not-exists error for `name`.
    pub fn group_not_exists(name: impl Into<String>) -> Self {
        Self::GroupNotExists(name.into())
    }
}
