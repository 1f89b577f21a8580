//! Group record types for the management core.
//!
//! This module defines the group structure that is stored in the group
//! repository and returned to management callers.

use serde::{Deserialize, Serialize};

use crate::patch::{FieldSpec, FieldValue, Patchable};

/// Fields of a group that a patch may touch. All of them hold text.
const GROUP_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("owner"),
    FieldSpec::text("contact"),
    FieldSpec::text("description"),
];

/// A group registration in the broker's metadata hierarchy.
///
/// The group name is the record's identity: repositories key every read and
/// write by it, and no operation renames a group after creation. The
/// descriptive fields are opaque to the management core, which never
/// interprets their contents.
///
/// # Fields
///
/// - `name`: Unique group identifier (immutable after creation)
/// - `owner`: Optional reference to the owning team
/// - `contact`: Optional contact address for the group
/// - `description`: Optional display text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Group {
    /// Create a new group with the given name and no descriptive fields.
    ///
    /// # Arguments
    ///
    /// * `name` - The unique group identifier
    ///
    /// # Example
    ///
    /// ```
    /// use courier_management_shared::Group;
    ///
    /// let group = Group::new("payments-team").with_owner("payments");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            contact: None,
            description: None,
        }
    }

    /// Set the owning-team reference.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the contact address.
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Set the display text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Patchable for Group {
    fn identity_field() -> &'static str {
        "name"
    }

    fn mutable_fields() -> &'static [FieldSpec] {
        GROUP_FIELDS
    }

    fn merge_field(&mut self, field: &str, value: FieldValue) {
        if let FieldValue::Text(text) = value {
            match field {
                "owner" => self.owner = text,
                "contact" => self.contact = text,
                "description" => self.description = text,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::{self, PatchError};
    use crate::types::PatchData;
    use serde_json::json;

    #[test]
    fn test_group_new() {
        let group = Group::new("payments-team");

        assert_eq!(group.name, "payments-team");
        assert!(group.owner.is_none());
        assert!(group.contact.is_none());
        assert!(group.description.is_none());
    }

    #[test]
    fn test_group_builders() {
        let group = Group::new("payments-team")
            .with_owner("payments")
            .with_contact("payments@example.com")
            .with_description("Payment processing consumers");

        assert_eq!(group.owner.as_deref(), Some("payments"));
        assert_eq!(group.contact.as_deref(), Some("payments@example.com"));
        assert_eq!(
            group.description.as_deref(),
            Some("Payment processing consumers")
        );
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let group = Group::new("payments-team").with_owner("payments");

        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains("\"owner\""));
        assert!(!json.contains("\"contact\""));

        let deserialized: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(group, deserialized);
    }

    #[test]
    fn test_patch_updates_descriptive_fields() {
        let group = Group::new("payments-team")
            .with_owner("payments")
            .with_description("Old text");
        let patch = PatchData::new()
            .set("owner", "billing")
            .set("contact", "billing@example.com");

        let patched = patch::apply(&group, &patch).unwrap();

        assert_eq!(patched.name, "payments-team");
        assert_eq!(patched.owner.as_deref(), Some("billing"));
        assert_eq!(patched.contact.as_deref(), Some("billing@example.com"));
        assert_eq!(patched.description.as_deref(), Some("Old text"));
    }

    #[test]
    fn test_patch_null_clears_field() {
        let group = Group::new("payments-team").with_description("Old text");
        let patch = PatchData::new().set("description", json!(null));

        let patched = patch::apply(&group, &patch).unwrap();

        assert!(patched.description.is_none());
    }

    #[test]
    fn test_patch_rejects_name() {
        let group = Group::new("payments-team");
        let patch = PatchData::new().set("name", "renamed-team");

        let error = patch::apply(&group, &patch).unwrap_err();

        assert!(matches!(error, PatchError::ImmutableField(field) if field == "name"));
    }
}
