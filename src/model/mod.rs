//! Data model shared by the conversion paths.

mod tabular;

pub use tabular::{CellValue, Column, TabularData};
