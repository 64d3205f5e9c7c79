//! Consolidated-sheet ingestion (regrouping by chosen supplier).
//!
//! The consolidated sheet lists one supplier per column starting at the third
//! column; the first empty header cell closes the supplier block. Each product
//! goes to the supplier with the lowest positive price, and the leftmost
//! column wins ties.

use tracing::{debug, info};

use pricelist_model::{NO_SUPPLIER_BUCKET, Product, SupplierGrouping};

use crate::document::TabularDocument;
use crate::error::{IngestError, Result};
use crate::numeric::{ParseMode, normalize};
use crate::supplier::unreserved_supplier_name;

/// Index of the first supplier column.
pub const FIRST_SUPPLIER_COLUMN: usize = 2;

/// Regroups a consolidated sheet into per-supplier product lists.
///
/// Prices are parsed strictly since the sheet was written by this tool; a
/// malformed price aborts the document. Products without any positive price
/// land in [`NO_SUPPLIER_BUCKET`].
pub fn ingest_global<D>(doc: &D) -> Result<SupplierGrouping>
where
    D: TabularDocument + ?Sized,
{
    let identifier = doc.identifier();
    let mut rows = doc
        .rows()
        .map_err(|e| IngestError::document(identifier, e))?;

    let mut grouping = SupplierGrouping::default();
    let header = match rows.next() {
        Some(row) => row.map_err(|e| IngestError::document(identifier, e))?,
        None => return Ok(grouping),
    };

    let supplier_columns: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .skip(FIRST_SUPPLIER_COLUMN)
        .map(|(idx, name)| (idx, name.trim()))
        .take_while(|(_, name)| !name.is_empty())
        .map(|(idx, name)| (idx, unreserved_supplier_name(name)))
        .collect();
    for (_, name) in &supplier_columns {
        grouping.add_supplier(name);
    }
    debug!(
        document = %identifier,
        suppliers = supplier_columns.len(),
        "read supplier columns"
    );

    // Row numbers are 1-based with the header on row 1.
    for (row_idx, row) in rows.enumerate() {
        let row_number = row_idx + 2;
        let row = row.map_err(|e| IngestError::document(identifier, e))?;
        if row.len() < 3 {
            continue;
        }
        let name = row[0].trim();
        let quantity = row[1].trim();
        if name.is_empty() || quantity.is_empty() {
            continue;
        }

        let mut best: Option<(f64, &str)> = None;
        for (column, supplier) in &supplier_columns {
            let raw = row.get(*column).map(String::as_str).unwrap_or("");
            let price =
                normalize(raw, ParseMode::Strict).map_err(|source| IngestError::InvalidNumber {
                    identifier: identifier.to_string(),
                    row: row_number,
                    column: column + 1,
                    source,
                })?;
            if price <= 0.0 {
                continue;
            }
            if best.is_none_or(|(lowest, _)| price < lowest) {
                best = Some((price, supplier.as_str()));
            }
        }

        match best {
            Some((price, supplier)) => grouping.push(supplier, Product::new(name, quantity, price)),
            None => grouping.push(NO_SUPPLIER_BUCKET, Product::new(name, quantity, 0.0)),
        }
    }

    info!(
        document = %identifier,
        suppliers = grouping.supplier_count(),
        products = grouping.product_count(),
        unassigned = grouping.unassigned().map_or(0, <[Product]>::len),
        "consolidated sheet regrouped"
    );
    Ok(grouping)
}
