//! Error types for the audit trail.
//! Defines the errors auditor implementations can raise while recording mutations.
use thiserror::Error;

/// Represents errors that can occur while recording an audit event.
#[derive(Debug, Clone, Error)]
pub enum AuditError {
    /// The audit sink rejected or failed to store the event.
    #[error("Audit sink error: {0}")]
    Sink(String),
}

impl AuditError {
    /// Create a sink error.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
