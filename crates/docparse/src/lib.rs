//! Normalized text extraction from office documents.
//!
//! The entry point is [`extract`]: give it a file's bytes, its name, and an
//! optional declared MIME type, and get back a tagged [`NormalizedDocument`]
//! record with slides, pages, or paragraphs depending on the format.

pub mod dispatch;

pub use dispatch::{extract, extract_as};
pub use docparse_core::{
    Error, ExportNamer, FileKind, NormalizedDocument, Page, Paragraph, Result, Shape, Slide,
};
