//! Error types for price-list ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by tabular document adapters.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Document file not found.
    #[error("document not found: {path}")]
    NotFound { path: PathBuf },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook could not be opened or decoded.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheet.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    /// File extension not handled by any adapter.
    #[error("unsupported document type: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// Malformed numeric cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("invalid number format: '{raw}'")]
    InvalidNumberFormat { raw: String },
}

/// Errors that can occur while ingesting price lists.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Document Errors ===
    /// The document collaborator failed to produce rows.
    #[error("failed to read document {identifier}: {source}")]
    DocumentRead {
        identifier: String,
        #[source]
        source: DocumentError,
    },

    // === Parsing Errors ===
    /// A strictly parsed price cell was malformed.
    #[error("{identifier}, row {row}, column {column}: {source}")]
    InvalidNumber {
        identifier: String,
        row: usize,
        column: usize,
        #[source]
        source: NormalizeError,
    },

    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn document(identifier: &str, source: DocumentError) -> Self {
        Self::DocumentRead {
            identifier: identifier.to_string(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::InvalidNumber {
            identifier: "resultado_geral.csv".to_string(),
            row: 3,
            column: 4,
            source: NormalizeError::InvalidNumberFormat {
                raw: "12x".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "resultado_geral.csv, row 3, column 4: invalid number format: '12x'"
        );
    }

    #[test]
    fn test_document_error_display() {
        let err = IngestError::document(
            "precos/atacado.xlsx",
            DocumentError::NoSheets {
                path: PathBuf::from("precos/atacado.xlsx"),
            },
        );
        assert_eq!(
            err.to_string(),
            "failed to read document precos/atacado.xlsx: workbook has no sheets: precos/atacado.xlsx"
        );
    }
}
