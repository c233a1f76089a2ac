//! Error types for export operations

use thiserror::Error;

/// Errors that can occur while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error on the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error writing delimited text
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Error writing the spreadsheet container
    #[error("XLSX container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error generating the document
    #[error("PDF error: {0}")]
    Pdf(#[from] crate::pdf::PdfError),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
