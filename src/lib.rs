//! # docshift
//!
//! Document and spreadsheet format conversion for Rust.
//!
//! docshift converts between tabular formats (xlsx ↔ csv) and
//! page-oriented formats (docx/doc → pdf, pdf → docx). The conversion
//! path is selected from the input path's suffix and the output path is
//! derived from a fixed mapping, so a caller only ever supplies an input
//! path (and optionally a destination directory) and receives back an
//! output path or an error.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> docshift::Result<()> {
//!     // report.csv is written next to the input
//!     let output = docshift::convert("report.xlsx")?;
//!     println!("{}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Tabular round-trips**: xlsx ↔ csv with column order and cell
//!   values preserved
//! - **Plain-text pagination**: docx/doc rendered to PDF with greedy
//!   120-character wrapping and deterministic page breaks
//! - **PDF reconstruction**: pdf → docx from extracted text
//! - **Uniform error contract**: every failure surfaces as a single
//!   error value; [`outcome`] flattens it to an `[ERROR: ...]` string
//!   for presentation layers

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod tabular;

// Re-export commonly used types
pub use convert::{Convert, ConvertOutcome, CsvToXlsx, DocToPdf, PdfToDocx, Router, XlsxToCsv};
pub use detect::{detect_kind, mapped_output, SourceKind};
pub use error::{Error, Result};
pub use model::{CellValue, Column, TabularData};
pub use render::{PageGeometry, PageSink, Paginator, PdfCanvas, RecordingSink};

use std::path::{Path, PathBuf};

/// Convert a file, writing the output next to the input.
///
/// The conversion pair is chosen by the input suffix: xlsx→csv,
/// csv→xlsx, docx/doc→pdf, pdf→docx. Returns the output path.
///
/// # Example
///
/// ```no_run
/// let output = docshift::convert("memo.docx").unwrap();
/// assert_eq!(output, std::path::PathBuf::from("memo.pdf"));
/// ```
pub fn convert<P: AsRef<Path>>(source: P) -> Result<PathBuf> {
    Router::with_defaults().convert(source.as_ref())
}

/// Convert a file, placing the output in the given directory.
pub fn convert_into<P: AsRef<Path>, D: AsRef<Path>>(source: P, dest_dir: D) -> Result<PathBuf> {
    Router::with_defaults().convert_into(source.as_ref(), dest_dir.as_ref())
}

/// Convert a file and flatten the result into the caller contract:
/// a success flag plus either the output path or an `[ERROR: ...]`
/// string. Never panics and never fails.
pub fn outcome<P: AsRef<Path>>(source: P) -> ConvertOutcome {
    Router::with_defaults().outcome(source.as_ref())
}

/// Directory a staging temp file should live in so persisting it onto
/// `dest` is a same-filesystem rename.
pub(crate) fn staging_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_unsupported_suffix() {
        let result = convert("notes.txt");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_outcome_never_fails() {
        let outcome = outcome("notes.txt");
        assert!(!outcome.success);
        assert!(outcome.detail.contains("unsupported"));
    }

    #[test]
    fn test_staging_dir() {
        assert_eq!(staging_dir(Path::new("/tmp/out.csv")), Path::new("/tmp"));
        assert_eq!(staging_dir(Path::new("out.csv")), Path::new("."));
    }
}
