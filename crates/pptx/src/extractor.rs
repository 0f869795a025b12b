//! PPTX slide extraction implementation.

use docparse_core::{Error, Result, Shape, Slide};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Read, Seek};
use std::sync::LazyLock;
use zip::ZipArchive;

/// Regex to pull the numeric index out of a slide member name.
static SLIDE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"slide(\d+)\.xml$").unwrap());

/// Extractor for PPTX (Office Open XML) slideshows.
pub struct SlideExtractor;

impl SlideExtractor {
    /// Create a new slide extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all slides from a PPTX container.
    ///
    /// Slide numbers are assigned 1..N by sorted position, contiguous even
    /// when the member numbering has gaps. Malformed XML in any slide part
    /// fails the whole document.
    pub fn extract<R: Read + Seek>(&self, reader: R) -> Result<Vec<Slide>> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::Zip(format!("Failed to open ZIP: {}", e)))?;

        let entries = slide_entries(&mut archive)?;
        log::debug!("Found {} slide parts", entries.len());

        let mut slides = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let xml = read_member(&mut archive, entry)?;
            slides.push(parse_slide(&xml, idx + 1)?);
        }

        Ok(slides)
    }
}

impl Default for SlideExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect slide member names in numeric order.
///
/// Only `ppt/slides/slide*.xml` parts count; media, layouts, masters, and
/// relationship files are ignored. Ordering is by the number embedded in the
/// name (lexical order is wrong from ten slides up); names without a
/// parseable number sort as 0, keeping their encounter order since the sort
/// is stable.
fn slide_entries<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
    let mut entries = Vec::new();

    for i in 0..archive.len() {
        let member = archive
            .by_index(i)
            .map_err(|e| Error::Zip(format!("Failed to read archive entry {}: {}", i, e)))?;
        let name = member.name().to_string();
        if name.starts_with("ppt/slides/slide") && name.ends_with(".xml") {
            entries.push(name);
        }
    }

    entries.sort_by_key(|name| slide_number_in_name(name));

    Ok(entries)
}

/// Extract the numeric index from a member name like `ppt/slides/slide3.xml`.
fn slide_number_in_name(name: &str) -> usize {
    SLIDE_NUMBER_REGEX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Parse one slide part into a [`Slide`].
///
/// Every `sp` shape element gets an ordinal in document order, including
/// shapes with no text body. Run text nodes under `txBody` are trimmed and
/// joined with single spaces.
fn parse_slide(xml: &str, slide_number: usize) -> Result<Slide> {
    let mut reader = Reader::from_str(xml);
    let mut slide = Slide::new(slide_number);

    let mut in_shape = false;
    let mut in_tx_body = false;
    let mut in_run_text = false;
    let mut ordinal = 0usize;
    let mut runs: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => {
                    in_shape = true;
                    ordinal += 1;
                    runs.clear();
                }
                b"txBody" if in_shape => {
                    in_tx_body = true;
                }
                b"t" if in_tx_body => {
                    in_run_text = true;
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                // A self-closing shape still gets an ordinal.
                if local_name(e.name().as_ref()) == b"sp" {
                    ordinal += 1;
                    slide.shapes.push(Shape::new(slide_number, ordinal, ""));
                }
            }
            Ok(Event::Text(ref e)) if in_run_text => {
                let text = e.unescape().map_err(|e| {
                    Error::Xml(format!("Bad run text in slide {}: {}", slide_number, e))
                })?;
                runs.push(text.trim().to_string());
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" if in_shape => {
                    let text = runs.join(" ").trim().to_string();
                    slide.shapes.push(Shape::new(slide_number, ordinal, text));
                    runs.clear();
                    in_shape = false;
                    in_tx_body = false;
                    in_run_text = false;
                }
                b"txBody" => {
                    in_tx_body = false;
                }
                b"t" => {
                    in_run_text = false;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "Malformed XML in slide {}: {}",
                    slide_number, e
                )));
            }
            _ => {}
        }
    }

    Ok(slide)
}

/// Read a member from the ZIP archive as a string.
fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut member = archive
        .by_name(path)
        .map_err(|e| Error::Zip(format!("Member not found in archive '{}': {}", path, e)))?;

    let mut content = String::new();
    member
        .read_to_string(&mut content)
        .map_err(|e| Error::Zip(format!("Failed to read '{}': {}", path, e)))?;

    Ok(content)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}
