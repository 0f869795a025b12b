//! Error types for document text extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during document text extraction.
///
/// All variants are recoverable at document granularity: one file's failure
/// never poisons a later extraction attempt.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Neither the filename extension nor the declared MIME type is recognized.
    #[error("Unsupported or unrecognized file type: {0}")]
    UnsupportedType(String),

    /// ZIP container error (PPTX, DOCX).
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML parsing error (PPTX, DOCX).
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// PDF structure error.
    #[error("PDF error: {0}")]
    Pdf(String),
}
