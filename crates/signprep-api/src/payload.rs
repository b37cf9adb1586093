//! Provider payload assembly.
//!
//! Converts pipeline [`FieldDescriptor`]s into the remote provider's
//! field-array representation and builds template/submission request
//! bodies. With tag-based positioning the provider anchors each field to
//! the literal `{{...}}` text in the uploaded file, so synthesized preview
//! areas are omitted from the payload; box positioning sends them instead.

use base64::Engine;
use serde::{Deserialize, Serialize};
use signprep_core::{FieldArea, FieldDescriptor, FieldType};

/// How field positions are communicated to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Positioning {
    /// The provider matches literal `{{...}}` tag locations in the
    /// uploaded file; no areas are sent.
    TextTags,
    /// Synthesized bounding boxes are sent verbatim.
    Boxes,
}

/// One field in the provider's template representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateField {
    /// Field name, unique within the template
    pub name: String,

    /// Human-readable label
    pub title: String,

    /// Field input type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Signer role responsible for this field
    pub role: String,

    /// Whether the signer must fill the field
    pub required: bool,

    /// Whether the field is pre-filled and locked
    pub readonly: bool,

    /// Pre-filled value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Hint shown in the empty field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Bounding boxes; omitted under tag-based positioning
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<FieldArea>,
}

/// One document attached to a template-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    /// Display name of the file
    pub name: String,

    /// Base64-encoded file bytes
    pub file: String,
}

impl TemplateDocument {
    /// Embed raw file bytes as a base64 document attachment.
    #[must_use = "builds the document attachment"]
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Self {
        Self {
            name: name.into(),
            file: base64::engine::general_purpose::STANDARD.encode(data),
        }
    }
}

/// Template-creation request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRequest {
    /// Template name shown in the provider dashboard
    pub name: String,

    /// Documents to upload
    pub documents: Vec<TemplateDocument>,

    /// Fields to create on the template
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TemplateField>,

    /// Caller-side correlation id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Template-creation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateResponse {
    /// Provider-assigned template id
    pub id: u64,

    /// URL slug of the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Template name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One signing party on a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submitter {
    /// Role label matching the template's fields
    pub role: String,

    /// Signer email address
    pub email: String,
}

/// Submission-creation request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Template to create the submission from
    pub template_id: u64,

    /// Whether the provider emails signing invitations
    pub send_email: bool,

    /// Signing parties, one per role
    pub submitters: Vec<Submitter>,
}

/// Submission-creation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    /// Provider-assigned submission id
    pub id: u64,

    /// Per-submitter signing URL slugs, when returned
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submitters: Vec<SubmissionSubmitter>,
}

/// Submitter entry in a submission response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSubmitter {
    /// Role label
    pub role: String,

    /// Signing URL slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Convert extracted fields into the provider's field array.
///
/// Order is preserved. Under [`Positioning::TextTags`] areas are omitted;
/// the provider positions each field at the literal tag location in the
/// uploaded file.
#[must_use = "builds the provider field array"]
pub fn template_fields(fields: &[FieldDescriptor], positioning: Positioning) -> Vec<TemplateField> {
    fields
        .iter()
        .map(|field| TemplateField {
            name: field.name.clone(),
            title: field.display_name(),
            field_type: field.field_type.clone(),
            role: field.role.clone(),
            required: field.required,
            readonly: field.readonly,
            default_value: field.default_value.clone(),
            placeholder: field.placeholder.clone(),
            areas: match positioning {
                Positioning::TextTags => Vec::new(),
                Positioning::Boxes => field.areas.clone(),
            },
        })
        .collect()
}

/// Unique signer roles over a field sequence, in first-seen order.
#[must_use = "collects the distinct signer roles"]
pub fn submitter_roles(fields: &[FieldDescriptor]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for field in fields {
        if !roles.iter().any(|role| role == &field.role) {
            roles.push(field.role.clone());
        }
    }
    roles
}
