//! Tabular document abstraction consumed by the ingestors.

use std::path::Path;

use crate::csv_table::CsvDocument;
use crate::error::DocumentError;
use crate::workbook::XlsxDocument;

/// A single row of cell values, left to right.
pub type Row = Vec<String>;

/// Lazy, forward-only sequence of rows; the header comes first.
pub type RowIter<'a> = Box<dyn Iterator<Item = Result<Row, DocumentError>> + 'a>;

/// A source of rows with a path-like identifier.
///
/// Rows never carry trailing empty cells, so a row's length is the position
/// of its last non-empty cell plus one.
pub trait TabularDocument {
    /// Path-like name used to derive supplier identity.
    fn identifier(&self) -> &str;

    /// Starts a fresh pass over the rows.
    fn rows(&self) -> Result<RowIter<'_>, DocumentError>;
}

/// Rows already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    identifier: String,
    rows: Vec<Row>,
}

impl MemoryDocument {
    pub fn new(identifier: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            identifier: identifier.into(),
            rows: rows.into_iter().map(trim_trailing_empty).collect(),
        }
    }

    /// Builds a document from string slices.
    pub fn from_rows(identifier: impl Into<String>, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect();
        Self::new(identifier, rows)
    }
}

impl TabularDocument for MemoryDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn rows(&self) -> Result<RowIter<'_>, DocumentError> {
        Ok(Box::new(self.rows.iter().cloned().map(Ok)))
    }
}

/// Extensions accepted by [`open_document`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Returns true when the path has an extension handled by [`open_document`].
pub fn is_supported_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Opens a document with the adapter matching its extension.
pub fn open_document(path: &Path) -> Result<Box<dyn TabularDocument>, DocumentError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        return Ok(Box::new(CsvDocument::open(path)?));
    }
    if is_supported_document(path) {
        return Ok(Box::new(XlsxDocument::open(path)?));
    }
    Err(DocumentError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

/// Trims whitespace and a stray byte-order mark from a cell.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Drops empty cells at the end of a row.
pub(crate) fn trim_trailing_empty(mut row: Row) -> Row {
    while row.last().is_some_and(|cell| cell.trim().is_empty()) {
        row.pop();
    }
    row
}
