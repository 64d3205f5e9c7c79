//! Batch ingestion of a folder's price lists.
//!
//! Each document is read independently: a failure on one file is recorded
//! and the remaining files are still processed.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info_span};

use pricelist_ingest::{IngestError, ingest_supplier, open_document};
use pricelist_model::Supplier;

/// A document that could not be read.
#[derive(Debug)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub error: IngestError,
}

/// Suppliers read from a list of documents, in input order.
#[derive(Debug, Default)]
pub struct SupplierBatch {
    pub suppliers: Vec<Supplier>,
    /// Documents that were not simple price lists.
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<DocumentFailure>,
}

impl SupplierBatch {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Reads every document as a supplier price list.
///
/// Output order follows `paths`, which keeps consolidation tie-breaking
/// deterministic.
pub fn load_suppliers<P: AsRef<Path>>(paths: &[P]) -> SupplierBatch {
    let _span = info_span!("load_suppliers", documents = paths.len()).entered();
    let mut batch = SupplierBatch::default();

    for path in paths {
        let path = path.as_ref();
        match load_one(path) {
            Ok(Some(supplier)) => batch.suppliers.push(supplier),
            Ok(None) => {
                debug!(path = %path.display(), "document skipped");
                batch.skipped.push(path.to_path_buf());
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to ingest document");
                batch.failures.push(DocumentFailure {
                    path: path.to_path_buf(),
                    error: err,
                });
            }
        }
    }
    batch
}

fn load_one(path: &Path) -> Result<Option<Supplier>, IngestError> {
    let doc = open_document(path).map_err(|source| IngestError::DocumentRead {
        identifier: path.display().to_string(),
        source,
    })?;
    ingest_supplier(doc.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        let wide = dir.path().join("c.csv");
        fs::write(&a, "PRODUTO,QTD,PREÇO\nArroz,5 kg,10\n").unwrap();
        fs::write(&wide, "A,B,C,D,E\n1,2,3,4,5\n").unwrap();
        let missing = dir.path().join("missing.csv");

        fs::write(&b, "PRODUTO,QTD,PREÇO\nArroz,5 kg,9\n").unwrap();
        let batch = load_suppliers(&[a, missing.clone(), b, wide.clone()]);

        let names: Vec<_> = batch.suppliers.iter().map(Supplier::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(batch.skipped, vec![wide]);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].path, missing);
        assert!(batch.has_failures());
    }
}
