//! Sparse patch payload for group updates.
//!
//! This module defines the mapping of field names to replacement values that
//! callers submit when updating a record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A sparse set of field updates keyed by field name.
///
/// Only the fields named in the mapping are touched by an update; absent
/// fields keep their current values, and an explicit JSON `null` clears an
/// optional field. The mapping deserializes transparently from a plain JSON
/// object, so `{"owner": "billing", "description": null}` is a complete
/// patch payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PatchData(BTreeMap<String, Value>);

impl PatchData {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace a field entry.
    ///
    /// # Example
    ///
    /// ```
    /// use courier_management_shared::PatchData;
    /// use serde_json::json;
    ///
    /// let patch = PatchData::new()
    ///     .set("owner", "billing")
    ///     .set("description", json!(null));
    /// assert_eq!(patch.len(), 2);
    /// ```
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Iterate over the field entries in field-name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// Number of fields named by the patch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the patch names no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for PatchData {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_data_set() {
        let patch = PatchData::new()
            .set("owner", "billing")
            .set("description", json!(null));

        assert_eq!(patch.len(), 2);
        assert!(!patch.is_empty());

        let entries: Vec<(&str, &Value)> = patch.entries().collect();
        assert_eq!(entries[0], ("description", &Value::Null));
        assert_eq!(entries[1], ("owner", &json!("billing")));
    }

    #[test]
    fn test_patch_data_set_replaces_entry() {
        let patch = PatchData::new().set("owner", "billing").set("owner", "payments");

        assert_eq!(patch.len(), 1);
        let entries: Vec<(&str, &Value)> = patch.entries().collect();
        assert_eq!(entries[0], ("owner", &json!("payments")));
    }

    #[test]
    fn test_patch_data_deserializes_from_plain_object() {
        let patch: PatchData =
            serde_json::from_str(r#"{"owner": "billing", "description": null}"#).unwrap();

        assert_eq!(
            patch,
            PatchData::new()
                .set("owner", "billing")
                .set("description", json!(null))
        );
    }
}
