//! Supplier price-list ingestion.
//!
//! A price list is a single sheet with a header row followed by
//! `name, quantity, price` rows. Anything wider is some other document that
//! happens to live in the input folder and is skipped.

use tracing::{debug, info, warn};

use pricelist_model::{NO_SUPPLIER_BUCKET, Product, Supplier};

use crate::document::TabularDocument;
use crate::error::{IngestError, Result};
use crate::numeric::{ParseMode, normalize};

/// Widest header still accepted as a simple price list.
pub const MAX_PRICE_LIST_COLUMNS: usize = 4;

/// Derives a supplier name from a path-like identifier.
///
/// Strips any directory prefix (`/` or `\`) and the final extension:
/// `precos/Atacado Silva.xlsx` becomes `Atacado Silva`. A stem that is blank
/// once trimmed keeps the extension (` .csv` becomes `.csv`); the result is
/// empty only when the whole file name is blank.
pub fn supplier_name(identifier: &str) -> String {
    let file_name = identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier);
    let stem = match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    };
    match stem.trim() {
        "" => file_name.trim().to_string(),
        stem => stem.to_string(),
    }
}

/// Renames a supplier that would collide with the reserved
/// [`NO_SUPPLIER_BUCKET`], so its products never mix with unpriced ones.
pub fn unreserved_supplier_name(name: &str) -> String {
    if name == NO_SUPPLIER_BUCKET {
        let renamed = format!("{name}_1");
        warn!(supplier = %name, renamed = %renamed, "supplier name is reserved, renaming");
        renamed
    } else {
        name.to_string()
    }
}

/// Reads one supplier's price list.
///
/// Returns `Ok(None)` when the document is empty, its header is wider than
/// [`MAX_PRICE_LIST_COLUMNS`], or no supplier name can be derived from its
/// identifier; skipping is not an error. Rows with fewer than
/// three cells, or without a name or quantity, are ignored. Prices are parsed
/// tolerantly, and a repeated product name replaces the earlier row.
pub fn ingest_supplier<D>(doc: &D) -> Result<Option<Supplier>>
where
    D: TabularDocument + ?Sized,
{
    let identifier = doc.identifier();
    let mut rows = doc
        .rows()
        .map_err(|e| IngestError::document(identifier, e))?;

    let header = match rows.next() {
        Some(row) => row.map_err(|e| IngestError::document(identifier, e))?,
        None => {
            info!(document = %identifier, "skipping empty document");
            return Ok(None);
        }
    };
    if header.len() > MAX_PRICE_LIST_COLUMNS {
        info!(
            document = %identifier,
            columns = header.len(),
            "skipping document: not a simple price list"
        );
        return Ok(None);
    }

    let derived_name = supplier_name(identifier);
    if derived_name.is_empty() {
        warn!(document = %identifier, "skipping document: blank file name");
        return Ok(None);
    }
    let mut supplier = Supplier::new(unreserved_supplier_name(&derived_name));
    let mut ignored_rows = 0usize;

    for row in rows {
        let row = row.map_err(|e| IngestError::document(identifier, e))?;
        if row.len() < 3 {
            ignored_rows += 1;
            continue;
        }
        let name = row[0].trim();
        let quantity = row[1].trim();
        if name.is_empty() || quantity.is_empty() {
            ignored_rows += 1;
            continue;
        }

        let price = normalize(&row[2], ParseMode::Tolerant).unwrap_or_default();
        if let Some(previous) = supplier.insert_product(Product::new(name, quantity, price)) {
            debug!(
                supplier = %supplier.name(),
                product = %previous.name,
                "duplicate product, keeping last row"
            );
        }
    }

    info!(
        supplier = %supplier.name(),
        products = supplier.product_count(),
        priced = supplier.total_priced_products(),
        ignored_rows,
        "supplier ingested"
    );
    Ok(Some(supplier))
}
