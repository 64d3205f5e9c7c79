//! Price-list discovery in an input folder.

use std::path::{Path, PathBuf};

use crate::document::is_supported_document;
use crate::error::{IngestError, Result};

/// Lists all supported price-list documents in a directory.
///
/// Returns files sorted by filename; this order becomes the supplier input
/// order and therefore decides price ties. Office lock files (`~$name.xlsx`)
/// and subdirectories are ignored.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_lock_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("~$"));

        if is_supported_document(&path) && !is_lock_file {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_supported_documents_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.csv", "a.xlsx", "~$a.xlsx", "notes.txt", "c.CSV"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("resultado.csv")).unwrap();

        let files = list_documents(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.xlsx", "b.csv", "c.CSV"]);
    }

    #[test]
    fn test_missing_directory() {
        let result = list_documents(Path::new("/nonexistent/precos"));
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
