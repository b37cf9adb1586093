//! Field type and signer role inference from tag names.
//!
//! Both functions are total: they lower-case the tag name, walk the
//! relevant pattern table in declared order, and fall back to the default
//! on no match. Nothing here can fail.

use crate::field::FieldType;
use crate::patterns::{DEFAULT_ROLE, ROLE_PATTERNS, TYPE_PATTERNS};

/// Infer a field type from a tag name by ordered substring matching.
///
/// Returns the type of the first table entry with a matching substring,
/// or [`FieldType::Text`] when nothing matches.
#[must_use]
pub fn infer_field_type(tag_name: &str) -> FieldType {
    let lower = tag_name.to_lowercase();
    for (field_type, substrings) in TYPE_PATTERNS {
        for substring in *substrings {
            if lower.contains(substring) {
                return field_type.clone();
            }
        }
    }
    FieldType::Text
}

/// Infer a signer role from a tag name by ordered substring matching.
///
/// Returns the role of the first table entry with a matching substring,
/// or [`DEFAULT_ROLE`] when nothing matches.
#[must_use]
pub fn infer_role(tag_name: &str) -> String {
    let lower = tag_name.to_lowercase();
    for (role, substrings) in ROLE_PATTERNS {
        for substring in *substrings {
            if lower.contains(substring) {
                return (*role).to_string();
            }
        }
    }
    DEFAULT_ROLE.to_string()
}
