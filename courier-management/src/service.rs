//! Group management service implementation.
//!
//! This module provides the main service for managing group metadata.
//! Application code uses this to create, inspect, update, and remove groups.
//!
//! # Note on Updates
//!
//! Updates are expressed as sparse patches rather than whole records. The
//! service reads the current record, applies the patch through the shared
//! patch engine, and writes the patched record back. The read and the write
//! are separate repository calls; serializing concurrent writers to the
//! same name is the repository's concern.

use std::sync::Arc;

use courier_management_repository::GroupRepository;
use courier_management_shared::{patch, Group, PatchData, Query};
use tracing::{instrument, warn};

use crate::errors::GroupServiceError;
use crate::interfaces::Auditor;

/// The main service for managing group metadata.
///
/// This is the high-level API that application code should use. It mediates
/// between callers and the injected repository, and notifies the injected
/// auditor after every successful mutation. The service holds no state of
/// its own: every read goes to the repository, so concurrent callers can
/// share one service value behind an `Arc`.
///
/// Mutation ordering is fixed: persist first, audit second. A failed
/// persistence call surfaces immediately and the auditor is never invoked
/// for it; a failed audit call surfaces after the record was already
/// persisted. The service performs no retries and no error translation.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use courier_management::{GroupService, LogAuditor};
/// use courier_management_repository::InMemoryGroupRepository;
/// use courier_management_shared::Group;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = GroupService::new(
///     Arc::new(InMemoryGroupRepository::new()),
///     Arc::new(LogAuditor::new()),
/// );
///
/// let group = Group::new("payments-team").with_owner("payments");
/// service.create_group(group, "alice").await?;
///
/// let details = service.get_group_details("payments-team").await?;
/// assert_eq!(details.owner.as_deref(), Some("payments"));
/// # Ok(())
/// # }
/// ```
pub struct GroupService {
    repository: Arc<dyn GroupRepository>,
    auditor: Arc<dyn Auditor>,
}

impl GroupService {
    /// Create a new GroupService.
    ///
    /// # Arguments
    ///
    /// * `repository` - The group store backing all reads and writes
    /// * `auditor` - The audit trail notified after successful mutations
    pub fn new(repository: Arc<dyn GroupRepository>, auditor: Arc<dyn Auditor>) -> Self {
        Self {
            repository,
            auditor,
        }
    }

    /// List the names of all registered groups.
    ///
    /// Names come back in the repository's listing order; the service does
    /// not re-sort them. No side effects.
    pub async fn list_group_names(&self) -> Result<Vec<String>, GroupServiceError> {
        Ok(self.repository.list_group_names().await?)
    }

    /// Fetch the full record of the group named `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(Group)` - The stored record
    /// * `Err(GroupServiceError::Repository)` - `NotFound` when no group has
    ///   this name, unchanged from the repository
    pub async fn get_group_details(&self, name: &str) -> Result<Group, GroupServiceError> {
        Ok(self.repository.get_group_details(name).await?)
    }

    /// Register a new group.
    ///
    /// The group is persisted first; the auditor is notified exactly once
    /// after the write succeeded. When the repository rejects the write,
    /// for example with `Conflict` on a duplicate name, no audit event is
    /// recorded.
    ///
    /// # Arguments
    ///
    /// * `group` - The group to register
    /// * `created_by` - Resolved identity of the creating caller
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The group was persisted and audited
    /// * `Err(GroupServiceError::Repository)` - The repository rejected the write
    /// * `Err(GroupServiceError::Audit)` - The group was persisted but the
    ///   audit event was not recorded
    #[instrument(skip_all, fields(group = %group.name, created_by = created_by))]
    pub async fn create_group(
        &self,
        group: Group,
        created_by: &str,
    ) -> Result<(), GroupServiceError> {
        self.repository.create_group(&group).await?;
        self.auditor.object_created(created_by, &group).await?;
        Ok(())
    }

    /// Remove the group named `name`.
    ///
    /// The deletion is persisted first; the auditor is notified exactly
    /// once after it succeeded. Removing an absent group surfaces the
    /// repository's `NotFound` and records nothing.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the group to remove
    /// * `removed_by` - Resolved identity of the removing caller
    #[instrument(skip_all, fields(group = name, removed_by = removed_by))]
    pub async fn remove_group(
        &self,
        name: &str,
        removed_by: &str,
    ) -> Result<(), GroupServiceError> {
        self.repository.remove_group(name).await?;
        self.auditor.object_removed(removed_by, name).await?;
        Ok(())
    }

    /// Verify that the group named `name` exists.
    ///
    /// A guard for callers that need an existence check without the full
    /// record.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The group exists
    /// * `Err(GroupServiceError::GroupNotExists)` - No group has this name
    pub async fn check_group_exists(&self, name: &str) -> Result<(), GroupServiceError> {
        if self.repository.group_exists(name).await? {
            Ok(())
        } else {
            Err(GroupServiceError::group_not_exists(name))
        }
    }

    /// Apply a sparse patch to the group named `name`.
    ///
    /// The current record is read, the patch is validated and applied
    /// through the shared patch engine, and the patched record replaces the
    /// stored one. The auditor is notified exactly once after the write
    /// succeeded, with the record as it was before and after the change.
    ///
    /// A patch that fails validation (unknown field, value of the wrong
    /// kind, or an attempt to touch the group name) is logged at warn level
    /// and surfaces as `MalformedPatch`; the read record is discarded,
    /// nothing is written, and no audit event is recorded.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the group to update
    /// * `patch_data` - Sparse field updates to apply
    /// * `modified_by` - Resolved identity of the updating caller
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The patched record was persisted and audited
    /// * `Err(GroupServiceError::Repository)` - `NotFound` when no group has
    ///   this name, or the write failed
    /// * `Err(GroupServiceError::MalformedPatch)` - The patch failed validation
    /// * `Err(GroupServiceError::Audit)` - The record was persisted but the
    ///   audit event was not recorded
    #[instrument(skip_all, fields(group = name, modified_by = modified_by))]
    pub async fn update_group(
        &self,
        name: &str,
        patch_data: PatchData,
        modified_by: &str,
    ) -> Result<(), GroupServiceError> {
        let before = self.repository.get_group_details(name).await?;

        let after = match patch::apply(&before, &patch_data) {
            Ok(after) => after,
            Err(error) => {
                warn!(group = name, error = %error, "Rejecting malformed group patch");
                return Err(error.into());
            }
        };

        self.repository.update_group(&after).await?;
        self.auditor
            .object_updated(modified_by, &before, &after)
            .await?;
        Ok(())
    }

    /// List the groups matching `query`.
    ///
    /// One snapshot is taken from the repository and the query is applied
    /// to it exactly once; groups come back in the snapshot's order.
    /// Mutations committed after the snapshot are not reflected in the
    /// result.
    pub async fn query_group(
        &self,
        query: &Query<Group>,
    ) -> Result<Vec<Group>, GroupServiceError> {
        let groups = self.repository.list_groups().await?;
        Ok(query.filter(groups))
    }
}
