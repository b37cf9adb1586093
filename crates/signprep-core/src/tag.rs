//! Placeholder tag scanning and parsing.
//!
//! Scans raw document text for `{{name[;key=value...]}}` tags, parses the
//! optional inline attributes, deduplicates by base name, and produces one
//! [`FieldDescriptor`] per unique tag. Layout is not assigned here.
//!
//! # Tag grammar
//!
//! - Delimiters are literal double braces; the inner content may not
//!   contain a closing brace. There is no escaping mechanism.
//! - The content is split on `;`. Part 0 (trimmed) is the tag name; the
//!   remaining parts are `key=value` attribute assignments with whitespace
//!   trimmed around both key and value.
//! - Malformed attribute parts (no `=`) and unrecognized keys are silently
//!   ignored.

use crate::field::{FieldDescriptor, FieldType};
use crate::infer::{infer_field_type, infer_role};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Matches one double-brace tag; the inner content may not contain `}`.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("tag pattern is a valid regex"));

/// Scan `text` for placeholder tags and build field descriptors.
///
/// Descriptors come back in first-seen order. Duplicate base names collapse
/// to the first occurrence; later occurrences are discarded entirely,
/// including any attribute suffixes they carry. Returns an empty vector
/// when no tags match — the caller decides whether that is an error.
#[must_use = "parsing produces the field descriptors"]
pub fn parse_tags(text: &str) -> Vec<FieldDescriptor> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut fields = Vec::new();

    for captures in TAG_RE.captures_iter(text) {
        let original_tag = &captures[0];
        let inner = captures[1].trim();

        let mut parts = inner.split(';');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() || !seen.insert(name.to_string()) {
            continue;
        }

        let mut field = FieldDescriptor::new(original_tag, name);
        let mut explicit_type: Option<FieldType> = None;
        let mut explicit_role: Option<String> = None;

        for part in parts {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "type" => explicit_type = Some(FieldType::from(value.to_string())),
                "role" => explicit_role = Some(value.to_string()),
                "required" => field.required = value != "false",
                "readonly" => field.readonly = value == "true",
                "default_value" => field.default_value = Some(value.to_string()),
                "placeholder" => field.placeholder = Some(value.to_string()),
                _ => {}
            }
        }

        field.field_type = explicit_type.unwrap_or_else(|| infer_field_type(name));
        field.role = explicit_role.unwrap_or_else(|| infer_role(name));

        log::debug!(
            "parsed tag {:?} -> name={:?} type={} role={:?}",
            original_tag,
            field.name,
            field.field_type,
            field.role
        );
        fields.push(field);
    }

    fields
}
