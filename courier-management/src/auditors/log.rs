//! Log-backed audit trail.
//!
//! This module records group mutations as structured log events.

use async_trait::async_trait;
use courier_management_shared::Group;
use tracing::info;

use crate::errors::AuditError;
use crate::interfaces::Auditor;

/// Auditor that records mutations as structured `tracing` events.
///
/// Every event carries the resolved caller identity and the affected group,
/// so the log stream doubles as a minimal audit trail. Recording to the log
/// never fails.
#[derive(Debug, Default)]
pub struct LogAuditor;

impl LogAuditor {
    /// Create a new log auditor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Auditor for LogAuditor {
    async fn object_created(&self, created_by: &str, created: &Group) -> Result<(), AuditError> {
        info!(created_by = created_by, group = %created.name, "Group created");
        Ok(())
    }

    async fn object_removed(&self, removed_by: &str, name: &str) -> Result<(), AuditError> {
        info!(removed_by = removed_by, group = name, "Group removed");
        Ok(())
    }

    async fn object_updated(
        &self,
        modified_by: &str,
        before: &Group,
        after: &Group,
    ) -> Result<(), AuditError> {
        info!(
            modified_by = modified_by,
            group = %after.name,
            before = ?before,
            after = ?after,
            "Group updated"
        );
        Ok(())
    }
}
