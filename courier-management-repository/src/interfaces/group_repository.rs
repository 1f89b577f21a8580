//! Group repository trait definition.
//!
//! This module defines the abstract interface for group persistence,
//! allowing for different backend implementations (in-memory, SQL, etc.).

use async_trait::async_trait;
use courier_management_shared::Group;

use crate::errors::GroupRepositoryError;

/// Abstracts the underlying group store.
///
/// This trait defines the interface for all group persistence backends.
/// Implementations are injected into the management service to enable
/// dependency injection and easy testing with in-memory implementations.
///
/// Implementations own the integrity rules of the store: name uniqueness on
/// create, whole-record replacement on update, and atomicity of each single
/// operation. The management core performs read-modify-write sequences
/// without holding locks across calls, so coordinating concurrent writers
/// to the same name is also a backend concern.
///
/// All methods return `Result<T, GroupRepositoryError>` for consistent error
/// handling across backends.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// List the names of all stored groups.
    ///
    /// The returned order is backend-defined but must be consistent with
    /// [`list_groups`](Self::list_groups).
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The stored group names
    /// * `Err(GroupRepositoryError)` - If the listing fails
    async fn list_group_names(&self) -> Result<Vec<String>, GroupRepositoryError>;

    /// List all stored groups.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Group>)` - The stored records, in the backend's listing order
    /// * `Err(GroupRepositoryError)` - If the listing fails
    async fn list_groups(&self) -> Result<Vec<Group>, GroupRepositoryError>;

    /// Fetch the group stored under `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(Group)` - The stored record
    /// * `Err(GroupRepositoryError::NotFound)` - If no group has this name
    async fn get_group_details(&self, name: &str) -> Result<Group, GroupRepositoryError>;

    /// Check whether a group is stored under `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the name is taken
    /// * `Err(GroupRepositoryError)` - If the check fails
    async fn group_exists(&self, name: &str) -> Result<bool, GroupRepositoryError>;

    /// Store a new group.
    ///
    /// # Arguments
    ///
    /// * `group` - The record to store, keyed by its name
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the group was stored
    /// * `Err(GroupRepositoryError::Conflict)` - If the name is already taken
    async fn create_group(&self, group: &Group) -> Result<(), GroupRepositoryError>;

    /// Delete the group stored under `name`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the group was deleted
    /// * `Err(GroupRepositoryError::NotFound)` - If no group has this name
    async fn remove_group(&self, name: &str) -> Result<(), GroupRepositoryError>;

    /// Replace the group stored under the record's name.
    ///
    /// The stored record is replaced as a whole; there is no field-level
    /// merge at this layer.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the group was replaced
    /// * `Err(GroupRepositoryError::NotFound)` - If no group has this name
    async fn update_group(&self, group: &Group) -> Result<(), GroupRepositoryError>;
}
