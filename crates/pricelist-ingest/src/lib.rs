//! Price-list ingestion.
//!
//! This crate turns tabular documents into the supplier model:
//!
//! - **Documents**: the [`TabularDocument`] abstraction with CSV and
//!   spreadsheet (calamine) adapters
//! - **Discovery**: deterministic listing of price lists in a folder
//! - **Numeric normalization**: locale-tolerant price parsing
//! - **Supplier ingestion**: one price list into a [`Supplier`](pricelist_model::Supplier)
//! - **Global ingestion**: a consolidated sheet back into per-supplier groups
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pricelist_ingest::{ingest_supplier, list_documents, open_document};
//!
//! for path in list_documents(Path::new("precos"))? {
//!     let doc = open_document(&path)?;
//!     if let Some(supplier) = ingest_supplier(doc.as_ref())? {
//!         println!("{}: {} products", supplier.name(), supplier.product_count());
//!     }
//! }
//! ```

mod csv_table;
mod discovery;
mod document;
mod error;
mod global;
mod numeric;
mod supplier;
mod workbook;

// === Error Types ===
pub use error::{DocumentError, IngestError, NormalizeError, Result};

// === Documents ===
pub use csv_table::CsvDocument;
pub use document::{
    MemoryDocument, Row, RowIter, SUPPORTED_EXTENSIONS, TabularDocument, is_supported_document,
    open_document,
};
pub use workbook::XlsxDocument;

// === File Discovery ===
pub use discovery::list_documents;

// === Numeric Normalization ===
pub use numeric::{ParseMode, format_number, normalize};

// === Ingestors ===
pub use global::{FIRST_SUPPLIER_COLUMN, ingest_global};
pub use supplier::{
    MAX_PRICE_LIST_COLUMNS, ingest_supplier, supplier_name, unreserved_supplier_name,
};
