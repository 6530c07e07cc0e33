//! Tabular read/write by format.
//!
//! Readers load an entire source into [`TabularData`], preserving column
//! order and native cell types; writers serialize the identical table to
//! the target format. Both sides stage output through a temp file so a
//! failed write never leaves a partial destination behind.

mod csv;
mod xlsx;

use crate::detect::SourceKind;
use crate::error::{Error, Result};
use crate::model::TabularData;
use std::path::Path;

/// Read a tabular source of the given kind.
pub fn read_tabular(path: &Path, kind: SourceKind) -> Result<TabularData> {
    match kind {
        SourceKind::TabularXlsx => xlsx::read(path),
        SourceKind::TabularCsv => csv::read(path),
        other => Err(Error::Conversion(format!(
            "{} is not a tabular source",
            other
        ))),
    }
}

/// Write a table to the given kind of destination.
pub fn write_tabular(table: &TabularData, path: &Path, kind: SourceKind) -> Result<()> {
    match kind {
        SourceKind::TabularXlsx => xlsx::write(table, path),
        SourceKind::TabularCsv => csv::write(table, path),
        other => Err(Error::Write(format!("{} is not a tabular target", other))),
    }
}
