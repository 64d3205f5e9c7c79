//! Price consolidation engine.
//!
//! Sits between ingestion and reporting: reads a batch of supplier price
//! lists and compares them product by product.

mod batch;
mod consolidate;
mod error;

pub use batch::{DocumentFailure, SupplierBatch, load_suppliers};
pub use consolidate::{MAX_SUPPLIERS, consolidate};
pub use error::{ConsolidationError, Result};
