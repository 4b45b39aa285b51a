/// Lookup sets of IDs that have an auxiliary PDF or EPUB file next to
/// their metadata record.
use crate::model::DocSubtype;
use compact_str::CompactString;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    pdf: HashSet<CompactString>,
    epub: HashSet<CompactString>,
}

impl ContentIndex {
    /// Record `path` if it is a `<id>.pdf` or `<id>.epub` file.
    ///
    /// Returns `true` if the path was recognised.
    pub fn observe(&mut self, path: &Path) -> bool {
        let (Some(stem), Some(ext)) = (
            path.file_stem().and_then(|s| s.to_str()),
            path.extension().and_then(|e| e.to_str()),
        ) else {
            return false;
        };
        match ext {
            "pdf" => self.insert_pdf(stem),
            "epub" => self.insert_epub(stem),
            _ => return false,
        }
        true
    }

    pub fn insert_pdf(&mut self, id: &str) {
        self.pdf.insert(CompactString::new(id));
    }

    pub fn insert_epub(&mut self, id: &str) {
        self.epub.insert(CompactString::new(id));
    }

    /// Content type for a document: EPUB, then PDF, else notebook.
    pub fn classify(&self, id: &str) -> DocSubtype {
        if self.epub.contains(id) {
            DocSubtype::Epub
        } else if self.pdf.contains(id) {
            DocSubtype::Pdf
        } else {
            DocSubtype::Notebook
        }
    }

    pub fn pdf_count(&self) -> usize {
        self.pdf.len()
    }

    pub fn epub_count(&self) -> usize {
        self.epub.len()
    }
}
