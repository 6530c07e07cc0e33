//! Input format detection and the suffix mapping table.
//!
//! Detection is a case-sensitive, longest-match comparison of the path's
//! trailing suffix against the supported set. The mapping table is
//! process-wide immutable configuration: each recognized suffix pairs with
//! the suffix of the format it converts to.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// The kind of source document, derived solely from the path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// An Excel workbook (`.xlsx`).
    TabularXlsx,
    /// A comma-separated values file (`.csv`).
    TabularCsv,
    /// A Word document, modern (`.docx`) or legacy binary (`.doc`).
    DocLike,
    /// A PDF document (`.pdf`).
    Pdf,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::TabularXlsx => "xlsx spreadsheet",
            SourceKind::TabularCsv => "csv table",
            SourceKind::DocLike => "word document",
            SourceKind::Pdf => "pdf document",
        };
        write!(f, "{}", name)
    }
}

/// One row of the suffix mapping table.
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    /// Recognized trailing suffix, including the dot.
    pub suffix: &'static str,
    /// Detected source kind.
    pub kind: SourceKind,
    /// Suffix of the conversion target.
    pub target: &'static str,
}

/// The suffix mapping table: xlsx→csv, csv→xlsx, pdf→docx, {docx,doc}→pdf.
///
/// Ordered longest suffix first so that `.docx` wins over `.doc`.
pub static SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule {
        suffix: ".docx",
        kind: SourceKind::DocLike,
        target: ".pdf",
    },
    SuffixRule {
        suffix: ".xlsx",
        kind: SourceKind::TabularXlsx,
        target: ".csv",
    },
    SuffixRule {
        suffix: ".csv",
        kind: SourceKind::TabularCsv,
        target: ".xlsx",
    },
    SuffixRule {
        suffix: ".pdf",
        kind: SourceKind::Pdf,
        target: ".docx",
    },
    SuffixRule {
        suffix: ".doc",
        kind: SourceKind::DocLike,
        target: ".pdf",
    },
];

/// Match a path against the suffix table.
///
/// Returns the first (longest) rule whose suffix matches the end of the
/// path, compared case-sensitively. `None` means the format is
/// unsupported; no converter is consulted in that case.
pub fn match_rule(path: &Path) -> Option<&'static SuffixRule> {
    let name = path.to_string_lossy();
    SUFFIX_RULES.iter().find(|rule| name.ends_with(rule.suffix))
}

/// Detect the source kind of a path, if supported.
pub fn detect_kind(path: &Path) -> Option<SourceKind> {
    match_rule(path).map(|rule| rule.kind)
}

/// Compute the output path for a recognized input.
///
/// The recognized *trailing* suffix is replaced with the rule's target
/// suffix; the rest of the path, including any earlier dots, is preserved.
pub fn output_path(path: &Path, rule: &SuffixRule) -> PathBuf {
    let name = path.to_string_lossy();
    debug_assert!(name.ends_with(rule.suffix));
    let stem = &name[..name.len() - rule.suffix.len()];
    PathBuf::from(format!("{}{}", stem, rule.target))
}

/// Compute the mapped output path for any supported input.
pub fn mapped_output(path: &Path) -> Option<PathBuf> {
    match_rule(path).map(|rule| output_path(path, rule))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_all_supported_suffixes() {
        assert_eq!(
            detect_kind(Path::new("report.xlsx")),
            Some(SourceKind::TabularXlsx)
        );
        assert_eq!(
            detect_kind(Path::new("report.csv")),
            Some(SourceKind::TabularCsv)
        );
        assert_eq!(detect_kind(Path::new("memo.docx")), Some(SourceKind::DocLike));
        assert_eq!(detect_kind(Path::new("memo.doc")), Some(SourceKind::DocLike));
        assert_eq!(detect_kind(Path::new("paper.pdf")), Some(SourceKind::Pdf));
    }

    #[test]
    fn test_docx_wins_over_doc() {
        let rule = match_rule(Path::new("memo.docx")).unwrap();
        assert_eq!(rule.suffix, ".docx");
    }

    #[test]
    fn test_detection_is_case_sensitive() {
        assert_eq!(detect_kind(Path::new("REPORT.XLSX")), None);
        assert_eq!(detect_kind(Path::new("memo.Doc")), None);
    }

    #[test]
    fn test_unsupported_suffix() {
        assert_eq!(detect_kind(Path::new("notes.txt")), None);
        assert_eq!(detect_kind(Path::new("no_extension")), None);
    }

    #[test]
    fn test_output_path_mapping() {
        assert_eq!(
            mapped_output(Path::new("report.xlsx")).unwrap(),
            PathBuf::from("report.csv")
        );
        assert_eq!(
            mapped_output(Path::new("report.csv")).unwrap(),
            PathBuf::from("report.xlsx")
        );
        assert_eq!(
            mapped_output(Path::new("paper.pdf")).unwrap(),
            PathBuf::from("paper.docx")
        );
        assert_eq!(
            mapped_output(Path::new("memo.docx")).unwrap(),
            PathBuf::from("memo.pdf")
        );
        assert_eq!(
            mapped_output(Path::new("memo.doc")).unwrap(),
            PathBuf::from("memo.pdf")
        );
    }

    #[test]
    fn test_only_trailing_suffix_is_replaced() {
        assert_eq!(
            mapped_output(Path::new("backup.xlsx.xlsx")).unwrap(),
            PathBuf::from("backup.xlsx.csv")
        );
    }

    #[test]
    fn test_mapped_suffix_differs_from_input() {
        for rule in SUFFIX_RULES {
            assert_ne!(rule.suffix, rule.target);
        }
    }

    #[test]
    fn test_directories_are_preserved() {
        assert_eq!(
            mapped_output(Path::new("/data/in/report.csv")).unwrap(),
            PathBuf::from("/data/in/report.xlsx")
        );
    }
}
