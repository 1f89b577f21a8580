//! Audit trail trait definition.
//!
//! This module defines the abstract interface for recording group mutations,
//! allowing for different audit sinks (logs, event streams, etc.).

use async_trait::async_trait;
use courier_management_shared::Group;

use crate::errors::AuditError;

/// Records successful group mutations for the audit trail.
///
/// The management service invokes an auditor exactly once per successful
/// mutation, strictly after the repository write, passing the resolved
/// caller identity and the affected state. Implementations store or forward
/// the event without interpreting it; a returned error surfaces to the
/// caller of the mutation, which at that point has already been persisted.
#[async_trait]
pub trait Auditor: Send + Sync {
    /// Record that `created_by` created `created`.
    async fn object_created(&self, created_by: &str, created: &Group) -> Result<(), AuditError>;

    /// Record that `removed_by` removed the group named `name`.
    async fn object_removed(&self, removed_by: &str, name: &str) -> Result<(), AuditError>;

    /// Record that `modified_by` changed a group from `before` to `after`.
    async fn object_updated(
        &self,
        modified_by: &str,
        before: &Group,
        after: &Group,
    ) -> Result<(), AuditError>;
}
