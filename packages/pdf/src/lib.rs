#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Per-page text extraction for benefits-statement PDFs.
//!
//! Statements are printed documents, so the service tables only exist as
//! positioned text. This crate pulls the text of each page out with
//! [`pdf_extract`] and exposes it through [`PageSource`], which is all the
//! claim parser needs from a document.

use std::path::Path;

/// Errors specific to PDF extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered, finite sequence of pages with extractable text.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Raw text of the page at `index`, or `None` past the last page.
    /// A page without text yields an empty string.
    fn page_text(&self, index: usize) -> Option<&str>;

    /// Iterates over every page's text in order.
    fn pages(&self) -> PageIter<'_, Self>
    where
        Self: Sized,
    {
        PageIter {
            source: self,
            next: 0,
        }
    }
}

/// Iterator over the pages of a [`PageSource`].
#[derive(Debug)]
pub struct PageIter<'a, S> {
    source: &'a S,
    next: usize,
}

impl<'a, S: PageSource> Iterator for PageIter<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.source.page_text(self.next)?;
        self.next += 1;
        Some(text)
    }
}

impl PageSource for Vec<String> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

/// A loaded PDF with the text of every page extracted.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pages: Vec<String>,
}

impl PdfDocument {
    /// Reads and extracts the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::Io`] if the file cannot be read, or
    /// [`PdfError::Extraction`] if it is not a readable PDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PdfError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::from_bytes(&bytes)
    }

    /// Extracts a PDF held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::Extraction`] if `bytes` is not a readable PDF.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PdfError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

        log::debug!(
            "Extracted {} page(s), {} characters of text",
            pages.len(),
            pages.iter().map(String::len).sum::<usize>()
        );

        Ok(Self { pages })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pages_iterate_in_order() {
        let pages = vec!["first".to_owned(), String::new(), "third".to_owned()];

        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.page_text(1), Some(""));
        assert_eq!(pages.page_text(3), None);
        assert_eq!(pages.pages().collect::<Vec<_>>(), vec!["first", "", "third"]);
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let err = PdfDocument::from_bytes(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Extraction(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PdfDocument::open("/nonexistent/statement.pdf").unwrap_err();
        assert!(matches!(err, PdfError::Io(_)));
    }
}
