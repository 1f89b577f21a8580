//! # Courier Management Repository
//!
//! This crate provides traits and implementations for interacting with the
//! group metadata store. It includes definitions for errors, interfaces,
//! and an embeddable in-memory implementation.

pub mod errors;
pub mod interfaces;
pub mod memory;

pub use errors::GroupRepositoryError;
pub use interfaces::GroupRepository;
pub use memory::InMemoryGroupRepository;
