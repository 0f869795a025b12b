//! Domain types for normalized document records.

use serde::{Deserialize, Serialize};

/// A normalized document record produced by one extraction pass.
///
/// Serializes to the tagged JSON shape consumed by external collaborators
/// (rendering, export-to-file, log persistence). The field names and nesting
/// are a compatibility contract and must not change:
///
/// ```json
/// { "type": "pptx", "slides": [ { "slide_number": 1, "shapes": [...] } ] }
/// { "type": "pdf",  "pages": [ { "page_number": 1, "text": "..." } ] }
/// { "type": "docx", "paragraphs": [ { "paragraph_number": 1, "text": "..." } ] }
/// ```
///
/// A record is created fresh per input file and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NormalizedDocument {
    /// Slideshow: ordered slides, each an ordered sequence of text shapes.
    Pptx { slides: Vec<Slide> },
    /// Paginated document: ordered pages with concatenated text.
    Pdf { pages: Vec<Page> },
    /// Flat-text document: ordered line-delimited paragraphs.
    Docx { paragraphs: Vec<Paragraph> },
}

impl NormalizedDocument {
    /// The lowercase tag this record serializes under.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Pptx { .. } => "pptx",
            Self::Pdf { .. } => "pdf",
            Self::Docx { .. } => "docx",
        }
    }

    /// Number of units (slides, pages, or paragraphs) in the record.
    pub fn unit_count(&self) -> usize {
        match self {
            Self::Pptx { slides } => slides.len(),
            Self::Pdf { pages } => pages.len(),
            Self::Docx { paragraphs } => paragraphs.len(),
        }
    }
}

/// A single extracted slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number, contiguous in extraction order.
    pub slide_number: usize,

    /// Text shapes in document order. May be empty.
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create a new slide with the given number and no shapes.
    pub fn new(slide_number: usize) -> Self {
        Self {
            slide_number,
            shapes: Vec::new(),
        }
    }
}

/// One text-bearing shape on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Deterministic id: `"{slideNumber}-{shapeOrdinal}"`, unique per slide.
    pub id: String,

    /// Display name; always equals `id`.
    pub name: String,

    /// Concatenated run text. May be empty.
    pub text: String,
}

impl Shape {
    /// Create a shape with the deterministic `"{slide}-{ordinal}"` identity.
    ///
    /// `ordinal` is 1-based and counts every shape on the slide in document
    /// order, including shapes with no text.
    pub fn new(slide_number: usize, ordinal: usize, text: impl Into<String>) -> Self {
        let id = format!("{}-{}", slide_number, ordinal);
        Self {
            name: id.clone(),
            id,
            text: text.into(),
        }
    }
}

/// A single extracted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number, contiguous in physical order.
    pub page_number: usize,

    /// All text fragments on the page, space-joined and trimmed.
    /// Empty for pages with no text.
    pub text: String,
}

/// A single extracted paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// 1-based paragraph number, contiguous in source order.
    pub paragraph_number: usize,

    /// One source line, trimmed. Empty lines are kept.
    pub text: String,
}
