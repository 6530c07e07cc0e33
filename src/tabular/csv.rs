//! CSV read/write via the csv crate.

use crate::error::{Error, Result};
use crate::model::{CellValue, TabularData};
use log::debug;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a CSV file.
///
/// The first record supplies the column names. Fields that parse cleanly
/// as numbers become numeric cells; everything else stays text.
pub fn read(path: &Path) -> Result<TabularData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::infer).collect());
    }
    debug!("read {} rows from {}", rows.len(), path.display());

    TabularData::from_rows(header, rows)
}

/// Write a table as CSV, one record per row, header first.
pub fn write(table: &TabularData, path: &Path) -> Result<()> {
    let mut staging = NamedTempFile::new_in(crate::staging_dir(path))?;
    {
        let mut writer = csv::Writer::from_writer(&mut staging);
        writer.write_record(table.header())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        writer.flush()?;
    }
    staging
        .persist(path)
        .map_err(|e| Error::Write(e.to_string()))?;
    debug!("wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}
