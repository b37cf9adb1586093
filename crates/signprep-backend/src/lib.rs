//! Document text extractors and pipeline for signprep
//!
//! This crate turns raw PDF/DOCX bytes into the text stream the tag parser
//! scans, then drives the full extraction pipeline.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                     DocumentPipeline                      │
//! │  (format detection, extractor dispatch, result assembly)  │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                    TextExtractor trait                    │
//! │  fn extract_bytes(&self, data: &[u8]) -> ExtractedText    │
//! └───────────────────────────────────────────────────────────┘
//!                │                           │
//!                ▼                           ▼
//!        ┌──────────────┐            ┌──────────────┐
//!        │ PdfExtractor │            │ DocxExtractor│
//!        │   (lopdf)    │            │ (zip + xml)  │
//!        └──────────────┘            └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use signprep_backend::DocumentPipeline;
//!
//! # fn main() -> signprep_core::Result<()> {
//! let pipeline = DocumentPipeline::new();
//! let extraction = pipeline.extract("agreement.pdf")?;
//!
//! for field in &extraction.fields {
//!     println!("{} ({}) -> {}", field.name, field.field_type, field.role);
//! }
//! # Ok(())
//! # }
//! ```

pub mod docx;
pub mod pdf;
pub mod pipeline;
pub mod traits;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use pipeline::DocumentPipeline;
pub use traits::{ExtractedText, TextExtractor};
