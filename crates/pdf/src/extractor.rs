//! PDF page extraction implementation.

use docparse_core::{Error, Page, Result};
use lopdf::Document;

/// Extractor for paginated PDF documents.
pub struct PageExtractor;

impl PageExtractor {
    /// Create a new page extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all pages from a PDF document.
    ///
    /// Pages are numbered 1..pageCount in physical order; the output length
    /// always equals the reported page count. Fragment order is trusted as
    /// the library reports it, with no layout reconstruction. A page with no
    /// text yields an empty string and is kept in the sequence.
    pub fn extract(&self, data: &[u8]) -> Result<Vec<Page>> {
        let doc = Document::load_mem(data)
            .map_err(|e| Error::Pdf(format!("Failed to load PDF: {}", e)))?;

        let page_ids = doc.get_pages();
        log::debug!("PDF reports {} pages", page_ids.len());

        let mut pages = Vec::with_capacity(page_ids.len());
        for (idx, page_no) in page_ids.keys().enumerate() {
            let raw = doc.extract_text(&[*page_no]).map_err(|e| {
                Error::Pdf(format!(
                    "Failed to extract text from page {}: {}",
                    page_no, e
                ))
            })?;
            pages.push(Page {
                page_number: idx + 1,
                text: join_fragments(&raw),
            });
        }

        Ok(pages)
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Join a page's raw text fragments with single spaces, trimmed.
fn join_fragments(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
