//! Core domain types, error taxonomy, and file-kind detection
//! for document text extraction.

pub mod error;
pub mod export;
pub mod format;
pub mod types;

pub use error::{Error, Result};
pub use export::ExportNamer;
pub use format::FileKind;
pub use types::{NormalizedDocument, Page, Paragraph, Shape, Slide};
