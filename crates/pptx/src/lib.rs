//! PPTX (Office Open XML) slide text extractor.
//!
//! Parses .pptx files, which are ZIP archives containing one XML part per
//! slide, into an ordered sequence of slides of text shapes.

pub mod extractor;

pub use extractor::SlideExtractor;
