//! WASM-compatible wrapper for document text extraction.
//!
//! Exposes the extraction core to JavaScript so an uploaded file can be
//! normalized entirely in the browser.

use docparse::NormalizedDocument;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Extract a normalized document record from an uploaded file.
///
/// # Arguments
/// * `data` - The raw bytes of the uploaded file
/// * `filename` - The original filename (the extension drives dispatch)
/// * `mime` - The browser-declared MIME type, if any
///
/// # Returns
/// The tagged record as a JavaScript object, or throws on error.
#[wasm_bindgen]
pub fn extract_document(
    data: &[u8],
    filename: &str,
    mime: Option<String>,
) -> Result<JsValue, JsValue> {
    let record = extract_impl(data, filename, mime.as_deref()).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&record)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Extract and serialize to a pretty-printed JSON string.
///
/// This is the exact payload a client writes when exporting the record to a
/// `.json` file.
#[wasm_bindgen]
pub fn extract_document_json(
    data: &[u8],
    filename: &str,
    mime: Option<String>,
) -> Result<String, JsValue> {
    let record = extract_impl(data, filename, mime.as_deref()).map_err(|e| JsValue::from_str(&e))?;

    serde_json::to_string_pretty(&record)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Export filename for a record type, from a caller-held counter value.
///
/// The caller owns and persists the counter; this only formats the name.
#[wasm_bindgen]
pub fn export_filename(type_tag: &str, counter: usize) -> String {
    docparse::ExportNamer::starting_at(counter).next_name(type_tag)
}

fn extract_impl(
    data: &[u8],
    filename: &str,
    mime: Option<&str>,
) -> Result<NormalizedDocument, String> {
    docparse::extract(data, filename, mime).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn docx_fixture() -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", FileOptions::default())
            .unwrap();
        writer
            .write_all(
                concat!(
                    "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
                    "<w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"
                )
                .as_bytes(),
            )
            .unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_impl_docx() {
        let record = extract_impl(&docx_fixture(), "note.docx", None).unwrap();
        assert_eq!(record.type_tag(), "docx");
        assert_eq!(record.unit_count(), 1);
    }

    #[test]
    fn test_extract_impl_rejects_unknown() {
        let err = extract_impl(b"\x89PNG", "image.png", Some("image/png")).unwrap_err();
        assert!(err.contains("Unsupported"));
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("pdf", 3), "data_pdf_3.json");
    }
}
