//! Tabular data types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value.
///
/// Values keep their source type: numeric cells stay numeric, text stays
/// text. No coercion happens beyond what the source format itself encodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    /// An empty cell.
    Empty,
    /// A text cell.
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// A boolean cell.
    Bool(bool),
}

impl CellValue {
    /// Parse a text field the way a type-inferring tabular reader would:
    /// a clean numeric parse yields a number, anything else stays text.
    pub fn infer(field: &str) -> Self {
        if field.is_empty() {
            return CellValue::Empty;
        }
        match field.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(field.to_string()),
        }
    }

    /// Whether the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    /// Text representation used by text-based targets.
    ///
    /// A float with zero fractional part prints without the trailing
    /// `.0`, so a spreadsheet `5` round-trips as `5`. This is the one
    /// accepted lossy edge of the text intermediate: it cannot carry the
    /// original numeric storage type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A named column with its cells in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header row.
    pub name: String,
    /// Cell values, one per data row.
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Create an empty column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
        }
    }
}

/// An ordered collection of named columns.
///
/// Invariant: every column has the same number of cells. Constructors
/// uphold it by padding short rows with [`CellValue::Empty`]; a row wider
/// than the header is rejected as malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularData {
    columns: Vec<Column>,
}

impl TabularData {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a header row and data rows.
    ///
    /// Short rows are padded with empty cells; a row longer than the
    /// header is a [`Error::Conversion`].
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let mut columns: Vec<Column> = header.into_iter().map(Column::new).collect();
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() > columns.len() {
                return Err(Error::Conversion(format!(
                    "row {} has {} cells but the header has {} columns",
                    index + 1,
                    row.len(),
                    columns.len()
                )));
            }
            let mut row = row.into_iter();
            for column in &mut columns {
                column.cells.push(row.next().unwrap_or(CellValue::Empty));
            }
        }
        Ok(Self { columns })
    }

    /// The columns in source order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    /// Column names in order.
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Iterate data rows in order, each as a slice of cell references.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.row_count()).map(move |r| self.columns.iter().map(|c| &c.cells[r]).collect())
    }

    /// Whether the table has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
