//! In-memory implementation of the group repository.
//!
//! This module provides an embeddable backend holding all groups in process
//! memory. It backs integration tests and single-process deployments.

mod group_repository;

pub use group_repository::InMemoryGroupRepository;
