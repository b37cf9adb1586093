//! PDF text extractor.
//!
//! Reads the document with `lopdf`, concatenates the text of every page in
//! page order, and reports the authoritative page count. No per-glyph
//! coordinate extraction is attempted; synthesized layout covers the
//! preview (see `signprep_core::layout`).

use crate::traits::{ExtractedText, TextExtractor};
use lopdf::{Dictionary, Document, Object};
use signprep_core::{DocumentMetadata, InputFormat, Result, SignprepError};

/// PDF text extractor backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor instance
    #[inline]
    #[must_use = "creates an extractor instance that should be used for extraction"]
    pub const fn new() -> Self {
        Self
    }

    /// Read Title/Author out of the trailer's `Info` dictionary, if present.
    fn read_info(doc: &Document) -> DocumentMetadata {
        let info: Option<&Dictionary> = match doc.trailer.get(b"Info") {
            Ok(Object::Reference(id)) => doc.get_dictionary(*id).ok(),
            Ok(Object::Dictionary(dict)) => Some(dict),
            _ => None,
        };

        let Some(info) = info else {
            return DocumentMetadata::default();
        };

        DocumentMetadata {
            title: Self::info_string(info, b"Title"),
            author: Self::info_string(info, b"Author"),
            created: None,
            modified: None,
        }
    }

    /// Decode a string entry from the `Info` dictionary.
    ///
    /// PDF `Info` strings may be UTF-16 or PDFDocEncoding; lossy UTF-8 is
    /// good enough for the Latin-script metadata this pipeline surfaces.
    fn info_string(info: &Dictionary, key: &[u8]) -> Option<String> {
        match info.get(key) {
            Ok(Object::String(bytes, _)) => {
                let value = String::from_utf8_lossy(bytes).trim().to_string();
                (!value.is_empty()).then_some(value)
            }
            _ => None,
        }
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> InputFormat {
        InputFormat::Pdf
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<ExtractedText> {
        let doc = Document::load_mem(data).map_err(|e| {
            SignprepError::ExtractionError(format!("failed to parse PDF: {e}"))
        })?;

        let pages = doc.get_pages();
        let page_count = pages.len();
        if page_count == 0 {
            return Err(SignprepError::ExtractionError(
                "PDF contains no pages".to_string(),
            ));
        }

        let page_numbers: Vec<u32> = pages.keys().copied().collect();
        let text = doc.extract_text(&page_numbers).map_err(|e| {
            SignprepError::ExtractionError(format!("failed to extract PDF text: {e}"))
        })?;

        log::debug!("PDF extractor: {page_count} page(s), {} characters", text.len());

        Ok(ExtractedText {
            text,
            page_count: Some(page_count),
            metadata: Self::read_info(&doc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    /// Build a single-page PDF whose content stream shows `text`.
    fn pdf_with_text(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content stream encodes"),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::from(page_id)],
                "Count" => 1i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal("Service Agreement"),
            "Author" => Object::string_literal("Legal Ops"),
        });
        doc.trailer.set("Info", info_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("failed to save test PDF");
        buf
    }

    #[test]
    fn test_extracts_text_and_page_count() {
        let data = pdf_with_text("Please sign {{client_signature}} here");
        let extracted = PdfExtractor::new().extract_bytes(&data).unwrap();

        assert_eq!(extracted.page_count, Some(1));
        assert!(
            extracted.text.contains("{{client_signature}}"),
            "text was: {:?}",
            extracted.text
        );
    }

    #[test]
    fn test_reads_info_metadata() {
        let data = pdf_with_text("body");
        let extracted = PdfExtractor::new().extract_bytes(&data).unwrap();

        assert_eq!(extracted.metadata.title.as_deref(), Some("Service Agreement"));
        assert_eq!(extracted.metadata.author.as_deref(), Some("Legal Ops"));
    }

    #[test]
    fn test_garbage_bytes_are_an_extraction_error() {
        let err = PdfExtractor::new()
            .extract_bytes(b"this is not a pdf")
            .unwrap_err();
        assert!(matches!(err, SignprepError::ExtractionError(_)));
    }

    #[test]
    fn test_declares_pdf_format() {
        assert_eq!(PdfExtractor::new().format(), InputFormat::Pdf);
    }
}
