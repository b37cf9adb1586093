//! Document pipeline orchestration.
//!
//! Format-agnostic driver over the extraction stages: pick a text
//! extractor by declared format, scan the text for placeholder tags,
//! synthesize preview layout, and bundle the result. Each run is
//! self-contained — one document in, one [`Extraction`] out — so separate
//! documents can be processed in parallel without shared state.

use crate::docx::DocxExtractor;
use crate::pdf::PdfExtractor;
use crate::traits::TextExtractor;
use signprep_core::{layout, parse_tags, Extraction, InputFormat, Result, SignprepError};
use std::path::Path;
use std::time::Instant;

/// Characters of scanned text carried as debug context on a no-tags
/// failure.
const TEXT_PREVIEW_CHARS: usize = 200;

/// Orchestrates text extraction, tag parsing, and layout synthesis.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentPipeline;

impl DocumentPipeline {
    /// Create a new pipeline instance
    #[inline]
    #[must_use = "creates a pipeline instance that should be used for extraction"]
    pub const fn new() -> Self {
        Self
    }

    /// Run the pipeline over a file, detecting the format from the path
    /// extension, falling back to magic-byte sniffing.
    ///
    /// # Errors
    /// Returns [`SignprepError::FormatError`] for undetectable or
    /// unsupported inputs, [`SignprepError::NoTagsFound`] when the document
    /// contains no placeholder tags, and extraction errors for unreadable
    /// files.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let format = InputFormat::from_path(path)
            .or_else(|| InputFormat::sniff(&data))
            .ok_or_else(|| {
                SignprepError::FormatError(format!(
                    "unsupported document format: {}",
                    path.display()
                ))
            })?;
        self.extract_bytes(&data, format)
    }

    /// Run the pipeline over raw document bytes with a declared format.
    ///
    /// # Errors
    /// Same failure modes as [`DocumentPipeline::extract`], minus path
    /// handling.
    pub fn extract_bytes(&self, data: &[u8], format: InputFormat) -> Result<Extraction> {
        let start = Instant::now();

        let extractor: &dyn TextExtractor = match format {
            InputFormat::Pdf => &PdfExtractor,
            InputFormat::Docx => &DocxExtractor,
        };
        let extracted = extractor.extract_bytes(data)?;
        let text_length = extracted.text.chars().count();
        log::debug!("extracted {text_length} characters from {format} input");

        let mut fields = parse_tags(&extracted.text);
        if fields.is_empty() {
            log::info!("no placeholder tags found in {format} document");
            return Err(SignprepError::NoTagsFound {
                text_length,
                text_preview: text_preview(&extracted.text),
            });
        }

        // PDF reports a real page count and clamps synthesized placement to
        // it; DOCX reports an estimate that never constrains placement.
        let (page_count, page_clamp) = match extracted.page_count {
            Some(count) => (count, Some(count)),
            None => (layout::estimated_page_count(fields.len()), None),
        };
        layout::synthesize(&mut fields, page_clamp);

        let latency = start.elapsed();
        log::info!(
            "extracted {} field(s) across {} page(s) from {format} document in {:?}",
            fields.len(),
            page_count,
            latency
        );

        Ok(Extraction {
            fields,
            page_count,
            format,
            text_length,
            metadata: extracted.metadata,
            latency,
        })
    }
}

/// Leading slice of the scanned text for no-tags diagnostics.
fn text_preview(text: &str) -> String {
    text.chars().take(TEXT_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_preview_truncates_on_char_boundary() {
        let long = "ä".repeat(300);
        let preview = text_preview(&long);
        assert_eq!(preview.chars().count(), 200);
    }

    #[test]
    fn test_text_preview_keeps_short_text() {
        assert_eq!(text_preview("short"), "short");
    }

    #[test]
    fn test_unsupported_extension_is_format_error() {
        use std::io::Write;

        let mut tmp = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .unwrap();
        tmp.write_all(b"{{x}}").unwrap();

        let err = DocumentPipeline::new().extract(tmp.path()).unwrap_err();
        assert!(matches!(err, SignprepError::FormatError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DocumentPipeline::new()
            .extract("/definitely/not/here.pdf")
            .unwrap_err();
        assert!(matches!(err, SignprepError::IoError(_)));
    }
}
