//! Paragraph extraction from word-processing documents.
//!
//! Both extractors normalize their source into an ordered sequence of
//! plain-text paragraphs. The `.docx` path yields one entry per structural
//! paragraph, empty paragraphs included; the legacy `.doc` path has no
//! structural paragraph metadata, so it splits the recovered text on
//! newlines, a coarser boundary that is accepted behavior.

mod doc;
mod docx;

use crate::error::{Error, Result};
use std::path::Path;

/// Extract the paragraphs of a word-processing document.
pub fn extract_paragraphs(path: &Path) -> Result<Vec<String>> {
    let name = path.to_string_lossy();
    if name.ends_with(".docx") {
        docx::extract(path)
    } else if name.ends_with(".doc") {
        doc::extract(path)
    } else {
        Err(Error::Extraction(format!(
            "{}: not a word-processing document",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unknown_suffix() {
        let result = extract_paragraphs(Path::new("notes.txt"));
        assert!(matches!(result, Err(Error::Extraction(_))));
    }

    #[test]
    fn test_missing_docx_is_an_extraction_failure() {
        let result = extract_paragraphs(Path::new("/nonexistent/memo.docx"));
        assert!(result.is_err());
    }
}
