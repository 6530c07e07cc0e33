//! PDF to Word-document reconstruction.

use crate::error::{Error, Result};
use docx_rs::{Docx, Paragraph, Run};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tempfile::NamedTempFile;
use unicode_normalization::UnicodeNormalization;

use super::Convert;

/// Reconstructs a plain `.docx` document from the text of a PDF.
///
/// Text extraction is delegated to pdf_extract. The recovered text is
/// NFC-normalized, stripped of control characters, and split into
/// paragraphs on blank-line boundaries; each paragraph becomes one run of
/// plain text in the output document. Layout and images are not carried
/// over.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfToDocx {
    _private: (),
}

impl PdfToDocx {
    /// Create a new converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Convert for PdfToDocx {
    fn name(&self) -> &str {
        "pdf-to-docx"
    }

    fn source_suffixes(&self) -> &[&str] {
        &[".pdf"]
    }

    fn target_suffix(&self) -> &str {
        ".docx"
    }

    fn convert(&self, source: &Path, dest: &Path) -> Result<()> {
        let raw = pdf_extract::extract_text(source)?;
        let paragraphs = reconstruct_paragraphs(&raw);

        let mut docx = Docx::new();
        for paragraph in &paragraphs {
            docx = docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(paragraph.as_str())));
        }

        let staging = NamedTempFile::new_in(crate::staging_dir(dest))?;
        docx.build()
            .pack(staging.as_file())
            .map_err(|e| Error::Write(e.to_string()))?;
        staging
            .persist(dest)
            .map_err(|e| Error::Write(e.to_string()))?;
        Ok(())
    }
}

/// Clean extracted PDF text and split it into paragraphs.
///
/// Paragraph boundaries are blank lines; within a paragraph, line breaks
/// and runs of whitespace collapse to single spaces.
fn reconstruct_paragraphs(text: &str) -> Vec<String> {
    static CONTROL: OnceLock<Regex> = OnceLock::new();
    static BLANK_LINES: OnceLock<Regex> = OnceLock::new();
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();

    let control =
        CONTROL.get_or_init(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap());
    let blank_lines = BLANK_LINES.get_or_init(|| Regex::new(r"\n\s*\n").unwrap());
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());

    let normalized: String = text.nfc().collect();
    let cleaned = control.replace_all(&normalized, " ");

    blank_lines
        .split(&cleaned)
        .map(|block| whitespace.replace_all(block.trim(), " ").into_owned())
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}
