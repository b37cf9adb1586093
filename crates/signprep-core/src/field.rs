//! Field descriptor types produced by the extraction pipeline.
//!
//! A [`FieldDescriptor`] is the structured record behind one unique
//! `{{...}}` tag: its identity, inferred or explicit type and signer role,
//! override attributes, and (after layout synthesis) a bounding box.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field input type understood by e-signature providers.
///
/// The builtin set is closed; inference only ever produces builtin values.
/// An explicit `type=` tag attribute outside the builtin set is carried
/// through verbatim as [`FieldType::Custom`] rather than rejected, so the
/// remote provider gets exactly what the document author wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Free-text input (the fallback type)
    Text,
    /// Drawn or typed signature
    Signature,
    /// Initials
    Initials,
    /// Date picker
    Date,
    /// Checkbox
    Checkbox,
    /// Image placement
    Image,
    /// File attachment
    File,
    /// Phone number
    Phone,
    /// Numeric input
    Number,
    /// Single-choice dropdown
    Select,
    /// Radio button group
    Radio,
    /// Company stamp / seal
    Stamp,
    /// Explicit override outside the builtin set, passed through verbatim
    Custom(String),
}

impl FieldType {
    /// Wire representation of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Signature => "signature",
            Self::Initials => "initials",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Image => "image",
            Self::File => "file",
            Self::Phone => "phone",
            Self::Number => "number",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Stamp => "stamp",
            Self::Custom(s) => s,
        }
    }

    /// True for members of the builtin enumeration.
    #[inline]
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl Default for FieldType {
    #[inline]
    fn default() -> Self {
        Self::Text
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => Self::Text,
            "signature" => Self::Signature,
            "initials" => Self::Initials,
            "date" => Self::Date,
            "checkbox" => Self::Checkbox,
            "image" => Self::Image,
            "file" => Self::File,
            "phone" => Self::Phone,
            "number" => Self::Number,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "stamp" => Self::Stamp,
            _ => Self::Custom(s),
        }
    }
}

impl From<FieldType> for String {
    #[inline]
    fn from(ty: FieldType) -> Self {
        match ty {
            FieldType::Custom(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for FieldType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized bounding box for one field.
///
/// Coordinates and dimensions are fractions of page width/height in
/// `[0, 1]`; `page` is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldArea {
    /// Left edge as a fraction of page width
    pub x: f64,
    /// Top edge as a fraction of page height
    pub y: f64,
    /// Width as a fraction of page width
    pub w: f64,
    /// Height as a fraction of page height
    pub h: f64,
    /// 1-indexed page number
    pub page: usize,
}

/// The structured record extracted from one unique `{{...}}` tag.
///
/// Created once per unique tag name during a pipeline run, in
/// first-occurrence order, and immutable thereafter apart from the layout
/// synthesizer filling `areas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Process-unique identifier, assigned at creation
    pub id: String,

    /// Verbatim matched tag text including delimiters,
    /// e.g. `{{client_signature}}`
    pub original_tag: String,

    /// Base identifier before any `;key=value` suffixes; unique within one
    /// extraction run
    pub name: String,

    /// Field input type (explicit `type=` attribute, else inferred from the
    /// name)
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Signer role label (explicit `role=` attribute, else inferred from
    /// the name)
    pub role: String,

    /// Whether the signer must fill this field
    pub required: bool,

    /// Whether the field is pre-filled and locked
    pub readonly: bool,

    /// Pre-filled value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Placeholder hint shown in the empty field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Synthesized bounding boxes; empty until layout synthesis runs,
    /// exactly one box afterwards
    pub areas: Vec<FieldArea>,
}

impl FieldDescriptor {
    /// Create a descriptor with default attributes for a freshly matched tag.
    ///
    /// Type and role start at their fallback values; the tag parser
    /// overwrites them with explicit attributes or inferred values.
    #[must_use = "creates a field descriptor that should be populated"]
    pub fn new(original_tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            original_tag: original_tag.into(),
            name: name.into(),
            field_type: FieldType::default(),
            role: crate::patterns::DEFAULT_ROLE.to_string(),
            required: true,
            readonly: false,
            default_value: None,
            placeholder: None,
            areas: Vec::new(),
        }
    }

    /// Presentational name derived from `name`: split on `_`, title-case
    /// each segment, join with single spaces.
    ///
    /// Recomputed on demand, never stored.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .split('_')
            .filter(|segment| !segment.is_empty())
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Upper-case the first character of a segment, lower-case the remainder.
fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
