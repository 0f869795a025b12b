//! DOCX paragraph text extractor.
//!
//! Two steps: a raw-text pass that flattens `word/document.xml` into a
//! newline-delimited blob, and a paragraph splitter that turns any flat
//! text blob into an ordered sequence of trimmed lines.

pub mod extractor;
pub mod raw;

pub use extractor::{split_paragraphs, ParagraphExtractor};
