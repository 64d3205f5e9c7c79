//! CSV price lists.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::document::{RowIter, TabularDocument, normalize_cell, trim_trailing_empty};
use crate::error::DocumentError;

/// A CSV file read lazily, one record per row.
///
/// Records may have any number of fields; the UTF-8 byte-order mark is
/// stripped from the first cell.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    path: PathBuf,
    identifier: String,
}

impl CsvDocument {
    /// Checks the file exists and prepares it for reading.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        if !path.is_file() {
            return Err(DocumentError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            identifier: path.display().to_string(),
        })
    }
}

impl TabularDocument for CsvDocument {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn rows(&self) -> Result<RowIter<'_>, DocumentError> {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|source| DocumentError::Csv {
                path: self.path.clone(),
                source,
            })?;
        let records = reader.into_records().map(move |record| {
            record
                .map(|record| trim_trailing_empty(record.iter().map(normalize_cell).collect()))
                .map_err(|source| DocumentError::Csv {
                    path: self.path.clone(),
                    source,
                })
        });
        Ok(Box::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Row;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn read_all(doc: &CsvDocument) -> Vec<Row> {
        doc.rows().unwrap().collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn test_reads_ragged_rows() {
        let file = create_temp_csv("PRODUTO,QTD,PRECO\nArroz,5 kg,\"21,90\"\nSal,1 kg\n");
        let doc = CsvDocument::open(file.path()).unwrap();
        let rows = read_all(&doc);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["PRODUTO", "QTD", "PRECO"]);
        assert_eq!(rows[1], vec!["Arroz", "5 kg", "21,90"]);
        assert_eq!(rows[2], vec!["Sal", "1 kg"]);
    }

    #[test]
    fn test_strips_bom_and_trailing_empty_cells() {
        let file = create_temp_csv("\u{feff}PRODUTO,QTD,PRECO,,\n  Arroz , 5 kg ,10,,\n");
        let doc = CsvDocument::open(file.path()).unwrap();
        let rows = read_all(&doc);

        assert_eq!(rows[0], vec!["PRODUTO", "QTD", "PRECO"]);
        assert_eq!(rows[1], vec!["Arroz", "5 kg", "10"]);
    }

    #[test]
    fn test_rows_can_be_read_twice() {
        let file = create_temp_csv("A,B,C\n1,2,3\n");
        let doc = CsvDocument::open(file.path()).unwrap();
        assert_eq!(read_all(&doc), read_all(&doc));
    }

    #[test]
    fn test_missing_file() {
        let result = CsvDocument::open(Path::new("/nonexistent/precos.csv"));
        assert!(matches!(result, Err(DocumentError::NotFound { .. })));
    }
}
