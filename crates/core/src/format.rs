//! File-kind detection from filename extension and declared MIME type.

use crate::error::{Error, Result};

/// MIME type for PDF files.
pub const MIME_PDF: &str = "application/pdf";
/// MIME type for legacy Word documents.
pub const MIME_DOC: &str = "application/msword";
/// MIME type for Word (OOXML) documents.
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// MIME type for PowerPoint (OOXML) presentations.
pub const MIME_PPTX: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// The resolved kind of an input file.
///
/// `Doc` is accepted and routed like `Docx`; a genuine OLE binary fails
/// later with a container error since legacy DOC parsing is unimplemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pptx,
    Pdf,
    Doc,
    Docx,
}

impl FileKind {
    /// Detect kind from a filename extension, case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detect kind from a declared MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            MIME_PPTX => Some(Self::Pptx),
            MIME_PDF => Some(Self::Pdf),
            MIME_DOC => Some(Self::Doc),
            MIME_DOCX => Some(Self::Docx),
            _ => None,
        }
    }

    /// Resolve the kind of an input file from its name and declared MIME type.
    ///
    /// Two-valued lookup with a defined precedence: the filename extension is
    /// checked first and wins on conflict; the declared MIME type is the
    /// fallback. If neither is recognized the file is rejected with
    /// [`Error::UnsupportedType`] and no record is produced.
    pub fn detect(filename: &str, mime: Option<&str>) -> Result<Self> {
        let ext = filename.rsplit('.').next().unwrap_or("");

        if let Some(kind) = Self::from_extension(ext) {
            return Ok(kind);
        }

        if let Some(kind) = mime.and_then(Self::from_mime) {
            return Ok(kind);
        }

        Err(Error::UnsupportedType(format!(
            "{} ({})",
            filename,
            mime.unwrap_or("no MIME type")
        )))
    }
}
