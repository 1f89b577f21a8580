//! This module defines and re-exports the interfaces for the management core.
//! It serves as a central point for accessing the audit trail trait.
mod auditor;

pub use auditor::Auditor;
