//! Input format types for template extraction.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input document format.
///
/// Only formats the extraction pipeline can read are listed here. PDF
/// carries an authoritative page count; DOCX does not (page breaks are a
/// rendering decision, so the pipeline estimates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
}

impl InputFormat {
    /// Detect format from a file extension.
    #[inline]
    #[must_use = "detects format from file extension"]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detect format from a file path's extension.
    #[inline]
    #[must_use = "detects format from file path"]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Sniff format from leading magic bytes.
    ///
    /// PDF files start with `%PDF-`; DOCX files are ZIP archives (`PK\x03\x04`).
    /// A bare ZIP signature is treated as DOCX since that is the only
    /// ZIP-container format the pipeline reads.
    #[inline]
    #[must_use = "sniffs format from magic bytes"]
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"%PDF-") {
            Some(Self::Pdf)
        } else if data.starts_with(b"PK\x03\x04") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    /// Lowercase wire tag for this format (`"pdf"` / `"docx"`).
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for InputFormat {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(InputFormat::from_extension("pdf"), Some(InputFormat::Pdf));
        assert_eq!(InputFormat::from_extension("PDF"), Some(InputFormat::Pdf));
        assert_eq!(InputFormat::from_extension("docx"), Some(InputFormat::Docx));
        assert_eq!(InputFormat::from_extension("doc"), None);
        assert_eq!(InputFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            InputFormat::from_path("contracts/msa.pdf"),
            Some(InputFormat::Pdf)
        );
        assert_eq!(
            InputFormat::from_path("Agreement.DOCX"),
            Some(InputFormat::Docx)
        );
        assert_eq!(InputFormat::from_path("no_extension"), None);
    }

    #[test]
    fn test_sniff_magic_bytes() {
        assert_eq!(InputFormat::sniff(b"%PDF-1.7 ..."), Some(InputFormat::Pdf));
        assert_eq!(
            InputFormat::sniff(b"PK\x03\x04rest-of-zip"),
            Some(InputFormat::Docx)
        );
        assert_eq!(InputFormat::sniff(b"plain text"), None);
        assert_eq!(InputFormat::sniff(b""), None);
    }

    #[test]
    fn test_serde_wire_tag() {
        assert_eq!(
            serde_json::to_string(&InputFormat::Pdf).unwrap(),
            "\"pdf\""
        );
        assert_eq!(
            serde_json::from_str::<InputFormat>("\"docx\"").unwrap(),
            InputFormat::Docx
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(InputFormat::Pdf.to_string(), "pdf");
        assert_eq!(InputFormat::Docx.to_string(), "docx");
    }
}
