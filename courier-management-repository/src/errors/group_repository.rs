//! Error types for the group repository.
//! Defines specific errors that can occur during persistence operations on groups.
use thiserror::Error;

/// Represents errors that can occur within the group repository.
///
/// This enum consolidates the persistence outcomes the management core
/// reacts to: absent records, duplicate records, and backend failures.
#[derive(Debug, Clone, Error)]
pub enum GroupRepositoryError {
    /// No group is stored under the requested name.
    #[error("Group not found: {0}")]
    NotFound(String),

    /// A group is already stored under the name being created.
    #[error("Group already exists: {0}")]
    Conflict(String),

    /// The backing store failed to execute the operation.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl GroupRepositoryError {
    /// Create a not-found error for `name`.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a conflict error for `name`.
    pub fn conflict(name: impl Into<String>) -> Self {
        Self::Conflict(name.into())
    }

    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
