//! This module defines the core data structures used across the courier
//! management system. It re-exports the `Group` record and the `PatchData`
//! sparse update payload.

pub mod group;
pub mod patch_data;

pub use group::Group;
pub use patch_data::PatchData;
