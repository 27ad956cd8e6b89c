/*!
 * Page text sources for a pipeline run.
 *
 * A run only needs two things from a document: how many pages it has and
 * the plain text of each page. `PdfDocument` reads them with lopdf;
 * `MemoryDocument` holds pre-extracted pages.
 */

use log::debug;
use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::errors::DocumentError;

/// Ordered pages of extractable text
pub trait PageSource: Send + Sync {
    /// Number of pages
    fn page_count(&self) -> usize;

    /// Text of the zero-based page `index`.
    ///
    /// `Ok(None)` means the page has no extractable text and should be
    /// skipped; `Err` means extraction itself broke.
    fn page_text(&self, index: usize) -> Result<Option<String>, DocumentError>;
}

/// PDF file loaded into memory
pub struct PdfDocument {
    path: PathBuf,
    document: Document,
    /// Page numbers as stored in the PDF, ascending
    page_numbers: Vec<u32>,
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("path", &self.path)
            .field("pages", &self.page_numbers.len())
            .finish()
    }
}

impl PdfDocument {
    /// Load and index the PDF at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let document = Document::load(path).map_err(|e| DocumentError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        debug!("Opened {} with {} pages", path.display(), page_numbers.len());

        Ok(Self {
            path: path.to_path_buf(),
            document,
            page_numbers,
        })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, DocumentError> {
        let Some(&page_number) = self.page_numbers.get(index) else {
            return Ok(None);
        };

        let text = self
            .document
            .extract_text(&[page_number])
            .map_err(|e| DocumentError::Extract {
                page: index + 1,
                message: e.to_string(),
            })?;

        Ok(non_blank(text))
    }
}

/// Pages held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    pages: Vec<Option<String>>,
}

impl MemoryDocument {
    pub fn new(pages: Vec<Option<String>>) -> Self {
        Self { pages }
    }

    /// Every page has text
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(pages.into_iter().map(|p| Some(p.into())).collect())
    }
}

impl PageSource for MemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, DocumentError> {
        Ok(self.pages.get(index).cloned().flatten().and_then(non_blank))
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}
