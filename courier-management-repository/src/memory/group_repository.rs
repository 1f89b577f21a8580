//! In-memory group store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use courier_management_shared::Group;
use tokio::sync::RwLock;

use crate::errors::GroupRepositoryError;
use crate::interfaces::GroupRepository;

/// Group store holding all records in process memory.
///
/// Records live in a name-keyed map behind an async read-write lock, so
/// every operation is atomic with respect to concurrent callers and
/// listings come back in lexicographic name order. This backend never
/// produces [`GroupRepositoryError::Storage`].
#[derive(Debug, Default)]
pub struct InMemoryGroupRepository {
    groups: RwLock<BTreeMap<String, Group>>,
}

impl InMemoryGroupRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn list_group_names(&self) -> Result<Vec<String>, GroupRepositoryError> {
        Ok(self.groups.read().await.keys().cloned().collect())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, GroupRepositoryError> {
        Ok(self.groups.read().await.values().cloned().collect())
    }

    async fn get_group_details(&self, name: &str) -> Result<Group, GroupRepositoryError> {
        self.groups
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| GroupRepositoryError::not_found(name))
    }

    async fn group_exists(&self, name: &str) -> Result<bool, GroupRepositoryError> {
        Ok(self.groups.read().await.contains_key(name))
    }

    async fn create_group(&self, group: &Group) -> Result<(), GroupRepositoryError> {
        let mut groups = self.groups.write().await;
        if groups.contains_key(&group.name) {
            return Err(GroupRepositoryError::conflict(&group.name));
        }
        groups.insert(group.name.clone(), group.clone());
        Ok(())
    }

    async fn remove_group(&self, name: &str) -> Result<(), GroupRepositoryError> {
        self.groups
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| GroupRepositoryError::not_found(name))
    }

    async fn update_group(&self, group: &Group) -> Result<(), GroupRepositoryError> {
        let mut groups = self.groups.write().await;
        match groups.get_mut(&group.name) {
            Some(stored) => {
                *stored = group.clone();
                Ok(())
            }
            None => Err(GroupRepositoryError::not_found(&group.name)),
        }
    }
}
