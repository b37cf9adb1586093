//! DOCX text extractor.
//!
//! DOCX files are ZIP archives; the main content lives in
//! `word/document.xml` and core metadata in `docProps/core.xml`. Text is
//! collected from `w:t` runs, with paragraph ends, line breaks, and tabs
//! turned into whitespace so tags in adjacent paragraphs never fuse
//! together. A tag split across multiple runs inside one paragraph
//! concatenates back into a single match, which is how word processors
//! commonly fragment typed `{{...}}` placeholders.
//!
//! DOCX has no authoritative page count — pagination is a rendering
//! decision — so `page_count` stays `None` and the pipeline estimates.

use crate::traits::{ExtractedText, TextExtractor};
use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use signprep_core::{DocumentMetadata, InputFormat, Result, SignprepError};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// DOCX text extractor backed by `zip` + `quick-xml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor instance
    #[inline]
    #[must_use = "creates an extractor instance that should be used for extraction"]
    pub const fn new() -> Self {
        Self
    }

    /// Read one archive entry into a string, if it exists.
    fn read_archive_entry(
        archive: &mut ZipArchive<Cursor<&[u8]>>,
        name: &str,
    ) -> Option<String> {
        let Ok(mut entry) = archive.by_name(name) else {
            return None;
        };
        let mut content = String::new();
        entry.read_to_string(&mut content).ok()?;
        Some(content)
    }

    /// Collect plain text from `word/document.xml`.
    fn walk_document_xml(xml_content: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml_content);
        // DOCX uses xml:space="preserve" for significant whitespace; don't
        // trim text events.
        reader.trim_text(false);

        let mut buf = Vec::new();
        let mut text = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"w:t" {
                        in_text_run = true;
                    }
                }
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:br" | b"w:cr" => text.push('\n'),
                    b"w:tab" => text.push('\t'),
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if in_text_run {
                        let t = e.unescape().unwrap_or_default();
                        text.push_str(&t);
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(SignprepError::ExtractionError(format!(
                        "error parsing document.xml: {e:?}"
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(text)
    }

    /// Parse title/author/created/modified out of `docProps/core.xml`.
    fn parse_core_properties(xml_content: &str) -> DocumentMetadata {
        let mut reader = Reader::from_str(xml_content);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut metadata = DocumentMetadata::default();
        let mut current: Option<&[u8]> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    current = match e.name().as_ref() {
                        b"dc:title" => Some(b"dc:title"),
                        b"dc:creator" => Some(b"dc:creator"),
                        b"dcterms:created" => Some(b"dcterms:created"),
                        b"dcterms:modified" => Some(b"dcterms:modified"),
                        _ => None,
                    };
                }
                Ok(Event::Text(e)) => {
                    let value = e.unescape().unwrap_or_default().to_string();
                    match current {
                        Some(b"dc:title") => metadata.title = Some(value),
                        Some(b"dc:creator") => metadata.author = Some(value),
                        Some(b"dcterms:created") => {
                            metadata.created = Self::parse_datetime(&value);
                        }
                        Some(b"dcterms:modified") => {
                            metadata.modified = Self::parse_datetime(&value);
                        }
                        _ => {}
                    }
                }
                Ok(Event::End(_)) => current = None,
                Ok(Event::Eof) | Err(_) => break,
                _ => {}
            }
            buf.clear();
        }

        metadata
    }

    /// Parse a W3CDTF (ISO 8601) datetime string, e.g. `2024-01-15T10:30:00Z`.
    #[inline]
    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl TextExtractor for DocxExtractor {
    fn format(&self) -> InputFormat {
        InputFormat::Docx
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<ExtractedText> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            SignprepError::ExtractionError(format!("not a DOCX archive: {e}"))
        })?;

        let document_xml = Self::read_archive_entry(&mut archive, "word/document.xml")
            .ok_or_else(|| {
                SignprepError::ExtractionError(
                    "archive has no word/document.xml".to_string(),
                )
            })?;
        let text = Self::walk_document_xml(&document_xml)?;

        let metadata = Self::read_archive_entry(&mut archive, "docProps/core.xml")
            .map(|xml| Self::parse_core_properties(&xml))
            .unwrap_or_default();

        log::debug!("DOCX extractor: {} characters", text.len());

        Ok(ExtractedText {
            text,
            page_count: None,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Wrap paragraphs of body XML into a minimal WordprocessingML document.
    fn document_xml(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        )
    }

    /// Build an in-memory DOCX with the given document.xml body and an
    /// optional docProps/core.xml.
    fn docx_bytes(body: &str, core_xml: Option<&str>) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        let options = SimpleFileOptions::default();

        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml(body).as_bytes()).unwrap();

        if let Some(core) = core_xml {
            writer.start_file("docProps/core.xml", options).unwrap();
            writer.write_all(core.as_bytes()).unwrap();
        }

        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_extracts_paragraph_text() {
        let data = docx_bytes(
            "<w:p><w:r><w:t>Hello {{client_name}}</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Sign: {{client_signature}}</w:t></w:r></w:p>",
            None,
        );
        let extracted = DocxExtractor::new().extract_bytes(&data).unwrap();

        assert!(extracted.text.contains("{{client_name}}"));
        assert!(extracted.text.contains("{{client_signature}}"));
        assert_eq!(extracted.page_count, None);
    }

    #[test]
    fn test_tag_split_across_runs_reassembles() {
        // Word frequently splits a typed placeholder across several runs.
        let data = docx_bytes(
            "<w:p><w:r><w:t>{{cli</w:t></w:r><w:r><w:t>ent_na</w:t></w:r>\
             <w:r><w:t>me}}</w:t></w:r></w:p>",
            None,
        );
        let extracted = DocxExtractor::new().extract_bytes(&data).unwrap();
        assert!(extracted.text.contains("{{client_name}}"));
    }

    #[test]
    fn test_paragraph_break_separates_text() {
        // Adjacent paragraphs must not fuse "}}" and "{{" into one blob
        // without a separator in between.
        let data = docx_bytes(
            "<w:p><w:r><w:t>{{a}}</w:t></w:r></w:p><w:p><w:r><w:t>{{b}}</w:t></w:r></w:p>",
            None,
        );
        let extracted = DocxExtractor::new().extract_bytes(&data).unwrap();
        assert!(extracted.text.contains("{{a}}\n{{b}}"));
    }

    #[test]
    fn test_preserved_whitespace_and_entities() {
        let data = docx_bytes(
            "<w:p><w:r><w:t xml:space=\"preserve\">fee &amp; tax {{fee_amount}}</w:t></w:r></w:p>",
            None,
        );
        let extracted = DocxExtractor::new().extract_bytes(&data).unwrap();
        assert!(extracted.text.contains("fee & tax {{fee_amount}}"));
    }

    #[test]
    fn test_reads_core_properties() {
        let core = "<?xml version=\"1.0\"?>\
            <cp:coreProperties \
              xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
              xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
              xmlns:dcterms=\"http://purl.org/dc/terms/\">\
            <dc:title>Master Service Agreement</dc:title>\
            <dc:creator>Legal Ops</dc:creator>\
            <dcterms:created>2024-01-15T10:30:00Z</dcterms:created>\
            <dcterms:modified>2024-02-01T08:00:00Z</dcterms:modified>\
            </cp:coreProperties>";
        let data = docx_bytes("<w:p><w:r><w:t>{{x}}</w:t></w:r></w:p>", Some(core));
        let extracted = DocxExtractor::new().extract_bytes(&data).unwrap();

        assert_eq!(
            extracted.metadata.title.as_deref(),
            Some("Master Service Agreement")
        );
        assert_eq!(extracted.metadata.author.as_deref(), Some("Legal Ops"));
        let created = extracted.metadata.created.unwrap();
        assert_eq!(created.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_missing_document_xml_is_an_extraction_error() {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"nope").unwrap();
        writer.finish().unwrap();

        let err = DocxExtractor::new()
            .extract_bytes(&cursor.into_inner())
            .unwrap_err();
        assert!(matches!(err, SignprepError::ExtractionError(_)));
    }

    #[test]
    fn test_garbage_bytes_are_an_extraction_error() {
        let err = DocxExtractor::new()
            .extract_bytes(b"not a zip archive")
            .unwrap_err();
        assert!(matches!(err, SignprepError::ExtractionError(_)));
    }
}
