//! XLSX read (calamine) and write (rust_xlsxwriter).

use crate::error::{Error, Result};
use crate::model::{CellValue, TabularData};
use calamine::{open_workbook, Data, Reader, Xlsx};
use log::debug;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the first worksheet of a workbook.
///
/// The first row supplies the column names; every following row is data.
pub fn read(path: &Path) -> Result<TabularData> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::Conversion(format!("{}: workbook has no sheets", path.display())))?;
    let range = workbook.worksheet_range(&sheet)?;
    debug!(
        "read {} rows from sheet {:?} of {}",
        range.height(),
        sheet,
        path.display()
    );

    let mut rows = range.rows();
    let header: Vec<String> = match rows.next() {
        Some(cells) => cells.iter().map(|c| cell_value(c).to_string()).collect(),
        None => Vec::new(),
    };
    let data: Vec<Vec<CellValue>> = rows
        .map(|cells| cells.iter().map(cell_value).collect())
        .collect();

    TabularData::from_rows(header, data)
}

/// Write a table as a single-sheet workbook.
pub fn write(table: &TabularData, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in table.header().iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (row, cells) in table.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let (row, col) = ((row + 1) as u32, col as u16);
            match cell {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    sheet.write_string(row, col, s)?;
                }
                CellValue::Number(n) => {
                    sheet.write_number(row, col, *n)?;
                }
                CellValue::Bool(b) => {
                    sheet.write_boolean(row, col, *b)?;
                }
            }
        }
    }

    let staging = NamedTempFile::new_in(crate::staging_dir(path))?;
    workbook.save(staging.path())?;
    staging
        .persist(path)
        .map_err(|e| Error::Write(e.to_string()))?;
    debug!("wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("{}", e)),
    }
}
