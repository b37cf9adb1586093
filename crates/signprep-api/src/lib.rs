//! Provider integration for signprep
//!
//! Converts extracted field descriptors into the e-signature provider's
//! wire representation and talks to its template/submission endpoints.
//!
//! The provider positions fields from the literal `{{...}}` tag locations
//! in the uploaded file when tag-based positioning is used; the locally
//! synthesized preview boxes are then deliberately left out of the payload.
//!
//! # Example
//!
//! ```rust,no_run
//! use signprep_api::{template_fields, EsignClient, Positioning, TemplateDocument, TemplateRequest};
//! use signprep_backend::DocumentPipeline;
//!
//! # fn main() -> anyhow::Result<()> {
//! let extraction = DocumentPipeline::new().extract("agreement.pdf")?;
//!
//! let request = TemplateRequest {
//!     name: "Service Agreement".to_string(),
//!     documents: vec![TemplateDocument::from_bytes(
//!         "agreement.pdf",
//!         &std::fs::read("agreement.pdf")?,
//!     )],
//!     fields: template_fields(&extraction.fields, Positioning::TextTags),
//!     external_id: None,
//! };
//!
//! let client = EsignClient::new("https://esign.example.com/api", "token");
//! let template = client.create_template(&request)?;
//! println!("created template {}", template.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod payload;

pub use client::{ApiError, EsignClient};
pub use payload::{
    submitter_roles, template_fields, Positioning, SubmissionRequest, SubmissionResponse,
    SubmissionSubmitter, Submitter, TemplateDocument, TemplateField, TemplateRequest,
    TemplateResponse,
};
