//! Composite audit fan-out.
//!
//! This module combines several auditors into one, so a deployment can
//! record mutations to a log and an event stream at the same time.

use std::sync::Arc;

use async_trait::async_trait;
use courier_management_shared::Group;

use crate::errors::AuditError;
use crate::interfaces::Auditor;

/// Auditor that forwards every event to an ordered list of auditors.
///
/// Events are delivered sequentially in registration order. Delivery stops
/// at the first failing auditor and that failure surfaces to the caller, so
/// a mutation only counts as fully audited once every sink accepted it. An
/// empty composite accepts everything.
pub struct CompositeAuditor {
    auditors: Vec<Arc<dyn Auditor>>,
}

impl CompositeAuditor {
    /// Create a composite over the given auditors.
    pub fn new(auditors: Vec<Arc<dyn Auditor>>) -> Self {
        Self { auditors }
    }
}

#[async_trait]
impl Auditor for CompositeAuditor {
    async fn object_created(&self, created_by: &str, created: &Group) -> Result<(), AuditError> {
        for auditor in &self.auditors {
            auditor.object_created(created_by, created).await?;
        }
        Ok(())
    }

    async fn object_removed(&self, removed_by: &str, name: &str) -> Result<(), AuditError> {
        for auditor in &self.auditors {
            auditor.object_removed(removed_by, name).await?;
        }
        Ok(())
    }

    async fn object_updated(
        &self,
        modified_by: &str,
        before: &Group,
        after: &Group,
    ) -> Result<(), AuditError> {
        for auditor in &self.auditors {
            auditor.object_updated(modified_by, before, after).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Counting auditor double with optional failure injection.
    struct CountingAuditor {
        label: &'static str,
        calls: Mutex<Vec<String>>,
        should_fail: bool,
    }

    impl CountingAuditor {
        fn new(label: &'static str) -> Self {
            Self {
                label,
                calls: Mutex::new(Vec::new()),
                should_fail: false,
            }
        }

        fn failing(label: &'static str) -> Self {
            Self {
                should_fail: true,
                ..Self::new(label)
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Auditor for CountingAuditor {
        async fn object_created(&self, _created_by: &str, created: &Group) -> Result<(), AuditError> {
            if self.should_fail {
                return Err(AuditError::sink(format!("{} rejected the event", self.label)));
            }
            self.calls.lock().unwrap().push(created.name.clone());
            Ok(())
        }

        async fn object_removed(&self, _removed_by: &str, name: &str) -> Result<(), AuditError> {
            if self.should_fail {
                return Err(AuditError::sink(format!("{} rejected the event", self.label)));
            }
            self.calls.lock().unwrap().push(name.to_string());
            Ok(())
        }

        async fn object_updated(
            &self,
            _modified_by: &str,
            _before: &Group,
            after: &Group,
        ) -> Result<(), AuditError> {
            if self.should_fail {
                return Err(AuditError::sink(format!("{} rejected the event", self.label)));
            }
            self.calls.lock().unwrap().push(after.name.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_composite_forwards_to_every_auditor() {
        let first = Arc::new(CountingAuditor::new("first"));
        let second = Arc::new(CountingAuditor::new("second"));
        let auditors: Vec<Arc<dyn Auditor>> = vec![first.clone(), second.clone()];
        let composite = CompositeAuditor::new(auditors);

        composite
            .object_created("alice", &Group::new("payments"))
            .await
            .unwrap();
        composite.object_removed("alice", "payments").await.unwrap();

        assert_eq!(first.call_count(), 2);
        assert_eq!(second.call_count(), 2);
    }

    #[tokio::test]
    async fn test_composite_stops_at_first_failure() {
        let first = Arc::new(CountingAuditor::new("first"));
        let failing = Arc::new(CountingAuditor::failing("failing"));
        let last = Arc::new(CountingAuditor::new("last"));
        let auditors: Vec<Arc<dyn Auditor>> = vec![first.clone(), failing, last.clone()];
        let composite = CompositeAuditor::new(auditors);

        let result = composite
            .object_created("alice", &Group::new("payments"))
            .await;

        assert!(result.is_err());
        assert_eq!(first.call_count(), 1);
        assert_eq!(last.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_composite_accepts_everything() {
        let composite = CompositeAuditor::new(Vec::new());

        composite
            .object_created("alice", &Group::new("payments"))
            .await
            .unwrap();
    }
}
