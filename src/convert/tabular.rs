//! Tabular converters: xlsx→csv and csv→xlsx.

use crate::detect::SourceKind;
use crate::error::Result;
use crate::tabular::{read_tabular, write_tabular};
use std::path::Path;

use super::Convert;

/// Converts an Excel workbook into CSV.
///
/// All rows and columns of the first worksheet are read into memory and
/// written back out unchanged: column order is preserved and cell values
/// keep their literal text representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxToCsv {
    _private: (),
}

impl XlsxToCsv {
    /// Create a new converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Convert for XlsxToCsv {
    fn name(&self) -> &str {
        "xlsx-to-csv"
    }

    fn source_suffixes(&self) -> &[&str] {
        &[".xlsx"]
    }

    fn target_suffix(&self) -> &str {
        ".csv"
    }

    fn convert(&self, source: &Path, dest: &Path) -> Result<()> {
        let table = read_tabular(source, SourceKind::TabularXlsx)?;
        write_tabular(&table, dest, SourceKind::TabularCsv)
    }
}

/// Converts a CSV file into an Excel workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvToXlsx {
    _private: (),
}

impl CsvToXlsx {
    /// Create a new converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Convert for CsvToXlsx {
    fn name(&self) -> &str {
        "csv-to-xlsx"
    }

    fn source_suffixes(&self) -> &[&str] {
        &[".csv"]
    }

    fn target_suffix(&self) -> &str {
        ".xlsx"
    }

    fn convert(&self, source: &Path, dest: &Path) -> Result<()> {
        let table = read_tabular(source, SourceKind::TabularCsv)?;
        write_tabular(&table, dest, SourceKind::TabularXlsx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_declarations() {
        let x = XlsxToCsv::new();
        assert_eq!(x.source_suffixes(), &[".xlsx"]);
        assert_eq!(x.target_suffix(), ".csv");

        let c = CsvToXlsx::new();
        assert_eq!(c.source_suffixes(), &[".csv"]);
        assert_eq!(c.target_suffix(), ".xlsx");
    }

    #[test]
    fn test_missing_source_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        let result = XlsxToCsv::new().convert(Path::new("/nonexistent/in.xlsx"), &dest);
        assert!(result.is_err());
        assert!(!dest.exists());
    }
}
