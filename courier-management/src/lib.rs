//! # Courier Management
//!
//! This crate provides the group management core of the courier messaging
//! system. It includes the management service, the audit trail interface with
//! ready-made auditors, and the error taxonomy surfaced to management
//! callers.

pub mod auditors;
pub mod errors;
pub mod interfaces;
pub mod service;

pub use auditors::{CompositeAuditor, LogAuditor};
pub use errors::{AuditError, GroupServiceError};
pub use interfaces::Auditor;
pub use service::GroupService;
