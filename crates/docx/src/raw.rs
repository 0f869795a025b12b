//! Raw text extraction from the DOCX main document part.

use docparse_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Path of the main document part inside a DOCX container.
const DOCUMENT_PART: &str = "word/document.xml";

/// Flatten a DOCX container into a newline-delimited text blob.
///
/// One line per `p` paragraph element, in document order; explicit `br` and
/// `tab` run elements map to newline and tab. Markup is dropped entirely.
/// A legacy binary DOC file is not a ZIP and fails here with a container
/// error.
pub fn document_text<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = ZipArchive::new(reader)
        .map_err(|e| Error::Zip(format!("Failed to open ZIP: {}", e)))?;

    let mut member = archive.by_name(DOCUMENT_PART).map_err(|e| {
        Error::Zip(format!(
            "Member not found in archive '{}': {}",
            DOCUMENT_PART, e
        ))
    })?;

    let mut xml = String::new();
    member
        .read_to_string(&mut xml)
        .map_err(|e| Error::Zip(format!("Failed to read '{}': {}", DOCUMENT_PART, e)))?;

    parse_document_xml(&xml)
}

/// Collect per-paragraph run text from the main document XML.
fn parse_document_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"r" if in_paragraph => {
                    in_run = true;
                }
                b"t" if in_run => {
                    in_run_text = true;
                }
                b"br" if in_run => {
                    current.push('\n');
                }
                b"tab" if in_run => {
                    current.push('\t');
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                // An empty paragraph still produces a line.
                b"p" => {
                    paragraphs.push(String::new());
                }
                b"br" if in_run => {
                    current.push('\n');
                }
                b"tab" if in_run => {
                    current.push('\t');
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_run_text => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::Xml(format!("Bad run text in document part: {}", e)))?;
                current.push_str(&text);
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"p" => {
                    paragraphs.push(std::mem::take(&mut current));
                    in_paragraph = false;
                    in_run = false;
                    in_run_text = false;
                }
                b"r" => {
                    in_run = false;
                }
                b"t" => {
                    in_run_text = false;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "Malformed XML in document part: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    log::debug!("Flattened {} paragraphs from document part", paragraphs.len());

    Ok(paragraphs.join("\n"))
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}
