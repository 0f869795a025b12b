//! Paragraph extraction implementation.

use crate::raw;
use docparse_core::{Paragraph, Result};
use std::io::{Read, Seek};

/// Extractor for flat-text documents.
pub struct ParagraphExtractor;

impl ParagraphExtractor {
    /// Create a new paragraph extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all paragraphs from a DOCX container.
    ///
    /// Flattens the main document part to a newline-delimited blob, then
    /// splits it line by line.
    pub fn extract<R: Read + Seek>(&self, reader: R) -> Result<Vec<Paragraph>> {
        let blob = raw::document_text(reader)?;
        Ok(split_paragraphs(&blob))
    }
}

impl Default for ParagraphExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a flat text blob into paragraphs on line-break boundaries only.
///
/// Each line becomes one unit, trimmed, 1-based, in original order. Empty
/// lines are kept, so the unit count equals the line count of the source,
/// including a trailing empty segment if the blob ends with a newline.
pub fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    text.split('\n')
        .enumerate()
        .map(|(idx, line)| Paragraph {
            paragraph_number: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docparse_core::Error;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn build_docx(document_xml: &str) -> Cursor<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", FileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn test_split_keeps_empty_lines() {
        let paragraphs = split_paragraphs("a\n\nb");

        assert_eq!(paragraphs.len(), 3);
        let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
        let numbers: Vec<usize> = paragraphs.iter().map(|p| p.paragraph_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_split_trims_lines() {
        let paragraphs = split_paragraphs("  padded  \n\tindented");
        assert_eq!(paragraphs[0].text, "padded");
        assert_eq!(paragraphs[1].text, "indented");
    }

    #[test]
    fn test_trailing_newline_yields_trailing_empty_unit() {
        let paragraphs = split_paragraphs("a\nb\n");
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[2].text, "");
    }

    #[test]
    fn test_empty_blob_is_one_empty_unit() {
        let paragraphs = split_paragraphs("");
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].paragraph_number, 1);
        assert_eq!(paragraphs[0].text, "");
    }

    #[test]
    fn test_extract_from_container() {
        let xml = concat!(
            "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
            "<w:body>",
            "<w:p><w:r><w:t>Intro</w:t></w:r></w:p>",
            "<w:p/>",
            "<w:p><w:r><w:t>  Body text  </w:t></w:r></w:p>",
            "</w:body></w:document>"
        );

        let paragraphs = ParagraphExtractor::new().extract(build_docx(xml)).unwrap();

        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].text, "Intro");
        assert_eq!(paragraphs[1].text, "");
        assert_eq!(paragraphs[2].text, "Body text");
    }

    #[test]
    fn test_missing_document_part_fails() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", FileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let container = writer.finish().unwrap();

        let err = ParagraphExtractor::new().extract(container).unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }

    #[test]
    fn test_binary_doc_fails_as_container() {
        // OLE magic, not a ZIP; legacy DOC parsing is unimplemented.
        let bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0, 0];
        let err = ParagraphExtractor::new()
            .extract(Cursor::new(bytes))
            .unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }
}
