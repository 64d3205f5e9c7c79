//! Plain CSV output.

use std::path::Path;

use crate::error::{ReportError, Result};
use crate::layout::{Cell, Table};

/// Writes a table as CSV with its header row first.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    let to_err = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_err)?;
    writer.write_record(&table.headers).map_err(to_err)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(Cell::to_text))
            .map_err(to_err)?;
    }
    writer.flush().map_err(|e| to_err(e.into()))?;
    Ok(())
}
