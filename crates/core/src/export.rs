//! Sequential naming for exported JSON records.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Generates export filenames of the form `data_{type}_{n}.json`.
///
/// The counter is explicit and owned by the caller rather than ambient
/// persisted state; injecting a starting value lets a caller continue an
/// existing sequence.
#[derive(Debug)]
pub struct ExportNamer {
    next: AtomicUsize,
}

impl ExportNamer {
    /// Create a namer starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a namer continuing from a caller-supplied counter value.
    pub fn starting_at(first: usize) -> Self {
        Self {
            next: AtomicUsize::new(first),
        }
    }

    /// Produce the next filename for a record with the given type tag.
    pub fn next_name(&self, type_tag: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("data_{}_{}.json", type_tag, n)
    }
}

impl Default for ExportNamer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_increments() {
        let namer = ExportNamer::new();
        assert_eq!(namer.next_name("pptx"), "data_pptx_1.json");
        assert_eq!(namer.next_name("pdf"), "data_pdf_2.json");
        assert_eq!(namer.next_name("docx"), "data_docx_3.json");
    }

    #[test]
    fn test_injected_start() {
        let namer = ExportNamer::starting_at(7);
        assert_eq!(namer.next_name("pdf"), "data_pdf_7.json");
        assert_eq!(namer.next_name("pdf"), "data_pdf_8.json");
    }
}
