//! Spreadsheet workbooks (xlsx, xls, xlsb, ods) read through calamine.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::document::{Row, RowIter, TabularDocument, normalize_cell, trim_trailing_empty};
use crate::error::DocumentError;

/// The first worksheet of a workbook, materialized on open.
///
/// Rows are laid out in absolute sheet coordinates: a sheet whose used range
/// starts at `B3` still yields its header at row index 2, column index 1.
#[derive(Debug, Clone)]
pub struct XlsxDocument {
    identifier: String,
    sheet_name: String,
    rows: Vec<Row>,
}

impl XlsxDocument {
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        if !path.is_file() {
            return Err(DocumentError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let mut workbook = open_workbook_auto(path).map_err(|e| DocumentError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| DocumentError::NoSheets {
                path: path.to_path_buf(),
            })?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| DocumentError::Workbook {
                path: path.to_path_buf(),
                message: format!("sheet '{sheet_name}': {e}"),
            })?;
        tracing::debug!(
            path = %path.display(),
            sheet = %sheet_name,
            height = range.height(),
            width = range.width(),
            "loaded worksheet"
        );

        Ok(Self {
            identifier: path.display().to_string(),
            sheet_name,
            rows: range_rows(&range),
        })
    }

    /// Name of the worksheet the rows were read from.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl TabularDocument for XlsxDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn rows(&self) -> Result<RowIter<'_>, DocumentError> {
        Ok(Box::new(self.rows.iter().cloned().map(Ok)))
    }
}

fn range_rows(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Row> = vec![Vec::new(); start_row as usize];
    for cells in range.rows() {
        let mut row = vec![String::new(); start_col as usize];
        row.extend(cells.iter().map(cell_text));
        rows.push(trim_trailing_empty(row));
    }
    rows
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => normalize_cell(s),
        Data::Float(n) => n.to_string(),
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        other => normalize_cell(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("  Arroz ".to_string())), "Arroz");
        assert_eq!(cell_text(&Data::Float(8.0)), "8");
        assert_eq!(cell_text(&Data::Float(1234.56)), "1234.56");
        assert_eq!(cell_text(&Data::Int(12)), "12");
        assert_eq!(cell_text(&Data::Bool(true)), "TRUE");
    }

    #[test]
    fn test_missing_workbook() {
        let result = XlsxDocument::open(Path::new("/nonexistent/precos.xlsx"));
        assert!(matches!(result, Err(DocumentError::NotFound { .. })));
    }
}
