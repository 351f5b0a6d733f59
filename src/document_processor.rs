/*!
 * PDF text extraction.
 *
 * Opens a PDF document and produces one plain-text string per page, in page
 * order. Extraction is performed fresh on every call; nothing is cached and
 * the source file is never modified.
 */

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PdfError;

/// Ordered per-page text extracted from a single PDF document
#[derive(Debug, Clone)]
pub struct PageTextCollection {
    /// Path of the document the text came from
    pub source_file: PathBuf,
    /// Plain text of each page, in page order
    pub pages: Vec<String>,
}

impl PageTextCollection {
    /// Extract the text of every page of a PDF file.
    ///
    /// Returns one string per page in document order. Pages without any
    /// text yield empty strings; callers decide whether an all-empty
    /// result counts as "no text found".
    pub fn extract_from_file(path: &Path) -> Result<Self, PdfError> {
        let bytes = fs::read(path)?;
        Self::extract_from_bytes(path.to_path_buf(), &bytes)
    }

    /// Extract page texts from in-memory PDF bytes
    pub fn extract_from_bytes(source_file: PathBuf, bytes: &[u8]) -> Result<Self, PdfError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| PdfError::Parse(e.to_string()))?;

        if pages.is_empty() {
            return Err(PdfError::NoPages);
        }

        debug!(
            "Extracted text from {} pages of {:?}",
            pages.len(),
            source_file
        );

        Ok(Self { source_file, pages })
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether any page carries non-whitespace text
    pub fn has_text(&self) -> bool {
        self.pages.iter().any(|page| !page.trim().is_empty())
    }

    /// All page texts joined into a single string for translation.
    ///
    /// Pages are trimmed and joined with single spaces, so a document with
    /// page texts "Case 12345 opened", "Follow up" and "Closed on 2024"
    /// concatenates to "Case 12345 opened Follow up Closed on 2024".
    pub fn concatenated(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.trim())
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Text of the leading pages, used to seed the translation pane when a
    /// file is first browsed
    pub fn leading_pages(&self, count: usize) -> String {
        self.pages
            .iter()
            .take(count)
            .map(|page| page.trim())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Check whether a path carries the supported `.pdf` extension
pub fn is_supported_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
