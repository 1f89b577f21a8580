//! This module defines and re-exports the interfaces for the group repository.
//! It serves as a central point for accessing traits related to group persistence.
mod group_repository;

pub use group_repository::GroupRepository;
