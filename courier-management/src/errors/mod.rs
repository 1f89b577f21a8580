//! Error types for the courier management service.
//! Consolidates and re-exports the error taxonomy surfaced to management callers.
mod audit;
mod group_service;

pub use audit::AuditError;
pub use group_service::GroupServiceError;
