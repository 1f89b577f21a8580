//! # Courier Management Shared
//!
//! This crate defines shared data structures and types used across the courier
//! group management system. It includes the group record, the sparse patch
//! payload with its whitelist-based patch engine, and the composable query
//! filter applied to group listings.

pub mod patch;
pub mod query;
pub mod types;

pub use patch::{FieldKind, FieldSpec, FieldValue, PatchError, Patchable};
pub use query::Query;
pub use types::{Group, PatchData};
