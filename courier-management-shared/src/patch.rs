//! Whitelist-based patch application for management records.
//!
//! This module defines the patch engine used when a caller submits a sparse
//! update. A record type declares its mutable fields and their expected value
//! shapes through [`Patchable`], and [`apply`] validates every entry of a
//! [`PatchData`] against that schema before merging the validated values onto
//! a copy of the original record. Validation is all-or-nothing: one bad entry
//! rejects the whole patch and the original record is never touched.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::types::PatchData;

/// Expected value shape for a patchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string, or null to clear.
    Text,
    /// JSON number, or null to clear.
    Number,
    /// JSON boolean, or null to clear.
    Flag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Flag => write!(f, "flag"),
        }
    }
}

/// A patch value that passed validation, decoded for its declared kind.
///
/// A `None` payload comes from an explicit JSON `null` entry and clears the
/// target field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Number(Option<f64>),
    Flag(Option<bool>),
}

/// One entry of a record's mutable-field whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a text-valued field.
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    /// Declare a number-valued field.
    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
        }
    }

    /// Declare a boolean-valued field.
    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Flag,
        }
    }
}

/// Represents errors raised while validating a patch against a record schema.
///
/// Any of these conditions rejects the patch as a whole; the record under
/// update is left exactly as it was.
#[derive(Debug, Clone, Error)]
pub enum PatchError {
    /// The patch names a field outside the record's whitelist.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The patch value does not decode as the field's declared kind.
    #[error("Field {field} expects a {expected} value")]
    TypeMismatch { field: String, expected: FieldKind },

    /// The patch names the record's identity field.
    #[error("Field {0} is immutable")]
    ImmutableField(String),
}

/// Declares how a record type is patched.
///
/// Implementors list their mutable fields with expected kinds and merge
/// validated values one field at a time. The identity field is declared
/// separately and can never be patched.
pub trait Patchable: Clone {
    /// Name of the record's identity field.
    fn identity_field() -> &'static str;

    /// Whitelist of patchable fields with their expected kinds.
    fn mutable_fields() -> &'static [FieldSpec];

    /// Write one validated value into the record.
    ///
    /// Only invoked with field names from
    /// [`mutable_fields`](Self::mutable_fields) and values decoded for the
    /// declared kind.
    fn merge_field(&mut self, field: &str, value: FieldValue);
}

/// Validate `patch` against the record's schema and produce a patched copy
/// of `original`.
///
/// Every entry is validated before any merge happens, so a patch either
/// applies completely or not at all. Fields absent from the patch keep their
/// original values; an explicit JSON `null` clears the target field.
///
/// # Errors
///
/// * [`PatchError::ImmutableField`] - The patch names the identity field
/// * [`PatchError::UnknownField`] - The patch names a field outside the whitelist
/// * [`PatchError::TypeMismatch`] - A value does not decode as the declared kind
pub fn apply<T: Patchable>(original: &T, patch: &PatchData) -> Result<T, PatchError> {
    let mut validated = Vec::with_capacity(patch.len());

    for (field, value) in patch.entries() {
        if field == T::identity_field() {
            return Err(PatchError::ImmutableField(field.to_string()));
        }
        let spec = T::mutable_fields()
            .iter()
            .find(|spec| spec.name == field)
            .ok_or_else(|| PatchError::UnknownField(field.to_string()))?;
        validated.push((spec.name, decode_value(spec, value)?));
    }

    let mut patched = original.clone();
    for (field, value) in validated {
        patched.merge_field(field, value);
    }
    Ok(patched)
}

/// Decode one raw patch value as the field's declared kind.
fn decode_value(spec: &FieldSpec, value: &Value) -> Result<FieldValue, PatchError> {
    match spec.kind {
        FieldKind::Text => match value {
            Value::Null => Ok(FieldValue::Text(None)),
            Value::String(text) => Ok(FieldValue::Text(Some(text.clone()))),
            _ => Err(mismatch(spec)),
        },
        FieldKind::Number => match value {
            Value::Null => Ok(FieldValue::Number(None)),
            Value::Number(number) => number
                .as_f64()
                .map(|number| FieldValue::Number(Some(number)))
                .ok_or_else(|| mismatch(spec)),
            _ => Err(mismatch(spec)),
        },
        FieldKind::Flag => match value {
            Value::Null => Ok(FieldValue::Flag(None)),
            Value::Bool(flag) => Ok(FieldValue::Flag(Some(*flag))),
            _ => Err(mismatch(spec)),
        },
    }
}

fn mismatch(spec: &FieldSpec) -> PatchError {
    PatchError::TypeMismatch {
        field: spec.name.to_string(),
        expected: spec.kind,
    }
}
