//! PDF page text extractor.
//!
//! Walks the page tree of a PDF document and concatenates each page's text
//! fragments into one string per page.

pub mod extractor;

pub use extractor::PageExtractor;
