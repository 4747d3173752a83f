//! Implements DocumentExtractor. Reads page text with lopdf, in page order.
//!
//! Pages are joined with a line break and the result is whitespace-normalized,
//! so the output is a single line of space-separated tokens.
//!
//! lopdf drops control bytes inside a shown string, so a `Tj` holding `Foo\nbar`
//! reads as `Foobar`. Words in separate text objects or on separate pages stay apart.

use crate::domain::{normalize_whitespace, DomainError};
use crate::ports::DocumentExtractor;
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// PDF text extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String, DomainError> {
        let doc = Document::load(path).map_err(|e| {
            DomainError::Extraction(format!("failed to load '{}': {}", path.display(), e))
        })?;

        // get_pages() is keyed by page number, so iteration is in page order.
        let pages = doc.get_pages();
        let mut text = String::new();
        for &page_number in pages.keys() {
            let page_text = doc.extract_text(&[page_number]).map_err(|e| {
                DomainError::Extraction(format!(
                    "failed to read page {} of '{}': {}",
                    page_number,
                    path.display(),
                    e
                ))
            })?;
            text.push_str(&page_text);
            text.push('\n');
        }

        let normalized = normalize_whitespace(&text);
        debug!(
            path = %path.display(),
            pages = pages.len(),
            chars = normalized.chars().count(),
            "extracted PDF text"
        );
        Ok(normalized)
    }
}
