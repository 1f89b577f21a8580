//! Error types for the courier management repository.
//! Consolidates and re-exports error types related to group persistence operations.
mod group_repository;

pub use group_repository::GroupRepositoryError;
