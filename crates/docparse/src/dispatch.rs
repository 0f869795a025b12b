//! Format dispatch: route an input file to the extractor for its kind.

use docparse_core::{FileKind, NormalizedDocument, Result};
use docparse_docx::ParagraphExtractor;
use docparse_pdf::PageExtractor;
use docparse_pptx::SlideExtractor;
use std::io::Cursor;

/// Extract a normalized document record from a file's bytes.
///
/// The file kind is resolved from the filename extension first, then the
/// declared MIME type; an unrecognized file is rejected with
/// [`docparse_core::Error::UnsupportedType`] before any bytes are touched.
/// Each call operates on its own buffer and produces its own record, so one
/// file's failure never affects a later call.
pub fn extract(data: &[u8], filename: &str, mime: Option<&str>) -> Result<NormalizedDocument> {
    let kind = FileKind::detect(filename, mime)?;
    extract_as(data, kind)
}

/// Extract with an already-resolved file kind.
///
/// `Doc` routes like `Docx`; a genuine OLE binary fails in the container
/// step since legacy DOC parsing is unimplemented.
pub fn extract_as(data: &[u8], kind: FileKind) -> Result<NormalizedDocument> {
    log::debug!("Extracting {:?} input ({} bytes)", kind, data.len());

    match kind {
        FileKind::Pptx => {
            let slides = SlideExtractor::new().extract(Cursor::new(data))?;
            Ok(NormalizedDocument::Pptx { slides })
        }
        FileKind::Pdf => {
            let pages = PageExtractor::new().extract(data)?;
            Ok(NormalizedDocument::Pdf { pages })
        }
        FileKind::Doc | FileKind::Docx => {
            let paragraphs = ParagraphExtractor::new().extract(Cursor::new(data))?;
            Ok(NormalizedDocument::Docx { paragraphs })
        }
    }
}
