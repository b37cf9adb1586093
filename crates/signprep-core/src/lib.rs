//! # signprep-core — placeholder extraction pipeline
//!
//! Core types and pure pipeline stages for extracting `{{...}}` placeholder
//! tags from document text and turning them into e-signature field
//! descriptors.
//!
//! The pipeline stages live here because they are pure: given the same text
//! they always produce the same fields. Reading PDF/DOCX bytes into text is
//! the job of the `signprep-backend` crate.
//!
//! ## Pipeline
//!
//! ```text
//! document text ──▶ tag parser ──▶ inference ──▶ layout synthesizer
//!                  (tag.rs)       (infer.rs +    (layout.rs)
//!                                  patterns.rs)
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use signprep_core::{layout, parse_tags, FieldType};
//!
//! let text = "I, {{client_name}}, agree. Signed: {{client_signature}}";
//! let mut fields = parse_tags(text);
//!
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields[1].field_type, FieldType::Signature);
//! assert_eq!(fields[1].role, "Client");
//!
//! layout::synthesize(&mut fields, None);
//! assert_eq!(fields[0].areas.len(), 1);
//! ```

pub mod error;
pub mod extraction;
pub mod field;
pub mod format;
pub mod infer;
pub mod layout;
pub mod patterns;
pub mod tag;

pub use error::{Result, SignprepError};
pub use extraction::{DocumentMetadata, Extraction, ExtractionReport};
pub use field::{FieldArea, FieldDescriptor, FieldType};
pub use format::InputFormat;
pub use infer::{infer_field_type, infer_role};
pub use tag::parse_tags;
