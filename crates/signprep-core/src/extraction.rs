//! Extraction result types.
//!
//! [`Extraction`] is the in-process success bundle returned by the document
//! pipeline; [`ExtractionReport`] is the flattened wire contract handed to
//! HTTP callers and the CLI, carrying a success flag and, on failure, the
//! error message plus debug context.

use crate::error::{Result, SignprepError};
use crate::field::FieldDescriptor;
use crate::format::InputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metadata about the source document.
///
/// All fields are optional; DOCX core properties and the PDF `Info`
/// dictionary are both frequently absent or partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Creation date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<chrono::DateTime<chrono::Utc>>,

    /// Last modified date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// Result of one successful pipeline run over one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Field descriptors in first-seen order, each with one synthesized area
    pub fields: Vec<FieldDescriptor>,

    /// Authoritative page count (PDF) or estimate (DOCX)
    pub page_count: usize,

    /// Source document format
    pub format: InputFormat,

    /// Length of the scanned text, in characters
    pub text_length: usize,

    /// Source document metadata
    #[serde(default)]
    pub metadata: DocumentMetadata,

    /// Time taken to run the pipeline
    pub latency: Duration,
}

/// Flattened, caller-facing extraction report.
///
/// A success carries the field sequence, page count and format tag; a
/// failure carries a message and, for the no-tags case, the scanned-text
/// debug context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Whether extraction produced a field sequence
    pub success: bool,

    /// Extracted fields (empty on failure)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,

    /// Page count of the processed document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,

    /// Format tag of the processed document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<InputFormat>,

    /// Error message (failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Length of the scanned text (no-tags failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,

    /// Leading slice of the scanned text (no-tags failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
}

impl ExtractionReport {
    /// Build the wire report for a pipeline outcome.
    #[must_use = "builds the caller-facing report"]
    pub fn from_outcome(outcome: &Result<Extraction>) -> Self {
        match outcome {
            Ok(extraction) => Self {
                success: true,
                fields: extraction.fields.clone(),
                page_count: Some(extraction.page_count),
                format: Some(extraction.format),
                error: None,
                text_length: Some(extraction.text_length),
                text_preview: None,
            },
            Err(SignprepError::NoTagsFound {
                text_length,
                text_preview,
            }) => Self {
                success: false,
                fields: Vec::new(),
                page_count: None,
                format: None,
                error: Some(
                    "no {{...}} placeholder tags found in the document text".to_string(),
                ),
                text_length: Some(*text_length),
                text_preview: Some(text_preview.clone()),
            },
            Err(other) => Self {
                success: false,
                fields: Vec::new(),
                page_count: None,
                format: None,
                error: Some(other.to_string()),
                text_length: None,
                text_preview: None,
            },
        }
    }
}
