//! Error types for the docshift library.

use std::io;
use thiserror::Error;

/// Result type alias for docshift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a conversion.
///
/// Every collaborator failure is folded into this taxonomy at the module
/// boundary where it occurs; the router never lets one escape as a panic.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path's suffix matches no supported format.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The source document is unreadable or corrupt.
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// The source cannot be interpreted as tabular data.
    #[error("tabular conversion failed: {0}")]
    Conversion(String),

    /// The destination file could not be produced.
    #[error("write failed: {0}")]
    Write(String),

    /// The PDF-to-document reconstruction failed.
    #[error("document reconstruction failed: {0}")]
    Reconstruction(String),
}

impl From<calamine::XlsxError> for Error {
    fn from(err: calamine::XlsxError) -> Self {
        Error::Conversion(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Conversion(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Write(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Extraction(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Extraction(err.to_string())
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::Reconstruction(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("notes.txt".to_string());
        assert_eq!(err.to_string(), "unsupported file type: notes.txt");

        let err = Error::Conversion("row 3 is wider than the header".to_string());
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_maps_to_extraction() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
