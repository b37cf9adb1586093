//! Core trait definitions for text extractors.

use signprep_core::{DocumentMetadata, InputFormat, Result, SignprepError};
use std::path::Path;

/// Text pulled out of one document by a format-specific extractor.
///
/// Page boundaries are not preserved in `text`; the tag parser scans the
/// concatenated stream. `page_count` is `Some` only when the format
/// carries an authoritative count (PDF); DOCX leaves it `None` and the
/// pipeline estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    /// Concatenated document text
    pub text: String,

    /// Authoritative page count, when the format provides one
    pub page_count: Option<usize>,

    /// Source document metadata
    pub metadata: DocumentMetadata,
}

/// A format-specific "bytes → text" adapter.
///
/// One implementation per supported [`InputFormat`]; the document pipeline
/// dispatches on the declared format. Extractors are stateless and cheap to
/// construct.
pub trait TextExtractor: Send + Sync {
    /// Get the format this extractor handles
    fn format(&self) -> InputFormat;

    /// Extract text from document bytes
    ///
    /// # Errors
    /// Returns an error if the bytes cannot be parsed as this format.
    fn extract_bytes(&self, data: &[u8]) -> Result<ExtractedText>;

    /// Extract text from a file path
    ///
    /// # Errors
    /// Returns an error if file reading or parsing fails.
    fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedText>
    where
        Self: Sized,
    {
        let data = std::fs::read(path.as_ref()).map_err(SignprepError::IoError)?;
        self.extract_bytes(&data)
    }

    /// Check if this extractor can handle the given format
    fn can_handle(&self, format: InputFormat) -> bool {
        self.format() == format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeExtractor;

    impl TextExtractor for FakeExtractor {
        fn format(&self) -> InputFormat {
            InputFormat::Pdf
        }

        fn extract_bytes(&self, data: &[u8]) -> Result<ExtractedText> {
            Ok(ExtractedText {
                text: String::from_utf8_lossy(data).to_string(),
                page_count: Some(1),
                metadata: DocumentMetadata::default(),
            })
        }
    }

    #[test]
    fn test_can_handle_matches_declared_format() {
        let extractor = FakeExtractor;
        assert!(extractor.can_handle(InputFormat::Pdf));
        assert!(!extractor.can_handle(InputFormat::Docx));
    }

    #[test]
    fn test_extract_file_default_reads_bytes() {
        use std::io::Write;

        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"{{x}}").unwrap();

        let extracted = FakeExtractor.extract_file(tmp.path()).unwrap();
        assert_eq!(extracted.text, "{{x}}");
    }

    #[test]
    fn test_extract_file_missing_path_is_io_error() {
        let err = FakeExtractor
            .extract_file("/definitely/not/here.pdf")
            .unwrap_err();
        assert!(matches!(err, SignprepError::IoError(_)));
    }
}
