//! Ready-made auditor implementations.
//!
//! This module provides the log-backed auditor used by default deployments
//! and a composite auditor for fanning events out to several sinks.

mod composite;
mod log;

pub use composite::CompositeAuditor;
pub use log::LogAuditor;
