//! Conversion routing.
//!
//! A [`Router`] owns a set of [`Convert`] implementations, matches the
//! input path's suffix against them (case-sensitive, longest suffix
//! wins), derives the output path from the static mapping, and dispatches.
//! Every failure (unsupported suffix, unreadable source, unwritable
//! destination) comes back as a single [`crate::Error`]; nothing
//! escapes as a panic, and [`Router::outcome`] flattens the result into
//! the string contract a presentation layer needs.

mod docx;
mod pdf;
mod tabular;

pub use docx::PdfToDocx;
pub use pdf::DocToPdf;
pub use tabular::{CsvToXlsx, XlsxToCsv};

use crate::error::{Error, Result};
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Trait for path-to-path converters.
///
/// Implement this to add a conversion pair to the router. A converter
/// must fully write `dest` on success and must not leave a usable
/// partial file behind on failure.
pub trait Convert: Send + Sync {
    /// Name of this converter, for logs and diagnostics.
    fn name(&self) -> &str;

    /// Recognized source suffixes, with the leading dot (e.g. `".xlsx"`).
    fn source_suffixes(&self) -> &[&str];

    /// The suffix of the files this converter produces.
    fn target_suffix(&self) -> &str;

    /// Convert `source` into `dest`.
    fn convert(&self, source: &Path, dest: &Path) -> Result<()>;
}

/// Flattened result of a conversion, for callers that want a plain
/// success flag and display string rather than a `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertOutcome {
    /// Whether the conversion produced an output file.
    pub success: bool,
    /// The output path on success, `[ERROR: ...]` otherwise.
    pub detail: String,
}

impl ConvertOutcome {
    /// Flatten a conversion result.
    pub fn from_result(result: Result<PathBuf>) -> Self {
        match result {
            Ok(path) => Self {
                success: true,
                detail: path.display().to_string(),
            },
            Err(e) => Self {
                success: false,
                detail: format!("[ERROR: {}]", e),
            },
        }
    }
}

/// Dispatches conversions by input suffix.
pub struct Router {
    converters: Vec<Arc<dyn Convert>>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// Create a router with the built-in converters registered:
    /// xlsx→csv, csv→xlsx, docx/doc→pdf, pdf→docx.
    pub fn with_defaults() -> Self {
        let mut router = Self::new();
        router.register(Arc::new(XlsxToCsv::new()));
        router.register(Arc::new(CsvToXlsx::new()));
        router.register(Arc::new(DocToPdf::new()));
        router.register(Arc::new(PdfToDocx::new()));
        router
    }

    /// Register a converter.
    pub fn register(&mut self, converter: Arc<dyn Convert>) {
        self.converters.push(converter);
    }

    /// Find the converter whose suffix matches the path.
    ///
    /// The longest matching suffix wins, so `.docx` beats `.doc`.
    /// Matching is case-sensitive.
    fn match_converter(&self, source: &Path) -> Option<(&Arc<dyn Convert>, &str)> {
        let name = source.to_string_lossy();
        let mut best: Option<(&Arc<dyn Convert>, &str)> = None;
        for converter in &self.converters {
            for suffix in converter.source_suffixes().iter().copied() {
                if name.ends_with(suffix)
                    && best.map_or(true, |(_, held)| suffix.len() > held.len())
                {
                    best = Some((converter, suffix));
                }
            }
        }
        best
    }

    /// Convert a file, writing the output next to the input with the
    /// mapped suffix.
    ///
    /// Returns the output path, or the error if the suffix is
    /// unsupported or the conversion fails. On error no usable output
    /// file exists.
    pub fn convert(&self, source: &Path) -> Result<PathBuf> {
        let (converter, suffix) = self
            .match_converter(source)
            .ok_or_else(|| Error::UnsupportedFormat(source.display().to_string()))?;
        let dest = replace_suffix(source, suffix, converter.target_suffix());
        self.dispatch(converter, source, &dest)?;
        Ok(dest)
    }

    /// Convert a file, placing the output in `dest_dir` instead of next
    /// to the input.
    pub fn convert_into(&self, source: &Path, dest_dir: &Path) -> Result<PathBuf> {
        let (converter, suffix) = self
            .match_converter(source)
            .ok_or_else(|| Error::UnsupportedFormat(source.display().to_string()))?;
        let mapped = replace_suffix(source, suffix, converter.target_suffix());
        let file_name = mapped
            .file_name()
            .ok_or_else(|| Error::Write(format!("{}: no file name", source.display())))?;
        let dest = dest_dir.join(file_name);
        self.dispatch(converter, source, &dest)?;
        Ok(dest)
    }

    /// Convert and flatten into the caller-facing outcome string.
    ///
    /// Never fails: any error becomes `[ERROR: ...]`.
    pub fn outcome(&self, source: &Path) -> ConvertOutcome {
        ConvertOutcome::from_result(self.convert(source))
    }

    fn dispatch(&self, converter: &Arc<dyn Convert>, source: &Path, dest: &Path) -> Result<()> {
        debug!(
            "{}: {} -> {}",
            converter.name(),
            source.display(),
            dest.display()
        );
        converter.convert(source, dest)?;
        info!("converted {} -> {}", source.display(), dest.display());
        Ok(())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Replace a known trailing suffix with the target suffix.
fn replace_suffix(path: &Path, suffix: &str, target: &str) -> PathBuf {
    let name = path.to_string_lossy();
    debug_assert!(name.ends_with(suffix));
    let stem = &name[..name.len() - suffix.len()];
    PathBuf::from(format!("{}{}", stem, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect;

    #[test]
    fn test_unsupported_suffix_is_rejected_before_dispatch() {
        let router = Router::with_defaults();
        let err = router.convert(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn test_outcome_flattens_errors() {
        let router = Router::with_defaults();
        let outcome = router.outcome(Path::new("notes.txt"));
        assert!(!outcome.success);
        assert!(outcome.detail.starts_with("[ERROR: "));
        assert!(outcome.detail.ends_with(']'));
    }

    #[test]
    fn test_router_mapping_agrees_with_detect_table() {
        let router = Router::with_defaults();
        for rule in detect::SUFFIX_RULES {
            let source = PathBuf::from(format!("sample{}", rule.suffix));
            let (converter, suffix) = router.match_converter(&source).unwrap();
            assert_eq!(suffix, rule.suffix);
            assert_eq!(converter.target_suffix(), rule.target);
            assert_eq!(
                replace_suffix(&source, suffix, converter.target_suffix()),
                detect::mapped_output(&source).unwrap()
            );
        }
    }

    #[test]
    fn test_longest_suffix_wins() {
        let router = Router::with_defaults();
        let (_, suffix) = router.match_converter(Path::new("memo.docx")).unwrap();
        assert_eq!(suffix, ".docx");
        let (_, suffix) = router.match_converter(Path::new("memo.doc")).unwrap();
        assert_eq!(suffix, ".doc");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let router = Router::with_defaults();
        assert!(router.match_converter(Path::new("REPORT.XLSX")).is_none());
    }
}
