//! Error types for template extraction operations.

use thiserror::Error;

/// Error types that can occur while extracting template fields from a
/// document.
///
/// The inference and layout stages are total functions and never fail; every
/// failure originates either in the tag parser (no tags matched) or in the
/// format-specific text extractors (unreadable input).
#[derive(Error, Debug)]
pub enum SignprepError {
    /// No `{{...}}` placeholder tags were found in the extracted text.
    ///
    /// This is a recoverable, user-actionable condition rather than an
    /// internal fault: the document was read successfully, it just does not
    /// contain any tags. The variant carries enough context for the caller
    /// to show a useful diagnostic.
    #[error("no {{{{...}}}} placeholder tags found in document text ({text_length} characters scanned)")]
    NoTagsFound {
        /// Total length of the scanned text, in characters.
        text_length: usize,
        /// Leading slice of the scanned text, for diagnostics.
        text_preview: String,
    },

    /// Format detection or unsupported format error.
    ///
    /// The input is neither PDF nor DOCX, or the format could not be
    /// determined from the file extension or magic bytes.
    #[error("format error: {0}")]
    FormatError(String),

    /// Underlying text-extraction failure (corrupt file, unexpected
    /// structure). Propagated upward as-is; retries belong to the caller.
    #[error("extraction error: {0}")]
    ExtractionError(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Type alias for [`Result<T, SignprepError>`].
pub type Result<T> = std::result::Result<T, SignprepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tags_found_display() {
        let error = SignprepError::NoTagsFound {
            text_length: 42,
            text_preview: "Hello world".to_string(),
        };
        let display = format!("{error}");
        assert_eq!(
            display,
            "no {{...}} placeholder tags found in document text (42 characters scanned)"
        );
    }

    #[test]
    fn test_format_error_display() {
        let error = SignprepError::FormatError("unknown extension .xyz".to_string());
        assert_eq!(format!("{error}"), "format error: unknown extension .xyz");
    }

    #[test]
    fn test_extraction_error_display() {
        let error = SignprepError::ExtractionError("truncated ZIP archive".to_string());
        assert_eq!(format!("{error}"), "extraction error: truncated ZIP archive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SignprepError = io_err.into();
        match err {
            SignprepError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            _ => panic!("Expected IoError variant"),
        }
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(SignprepError::FormatError("unsupported".to_string()))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        match outer() {
            Err(SignprepError::FormatError(msg)) => assert_eq!(msg, "unsupported"),
            _ => panic!("Expected FormatError to propagate"),
        }
    }
}
