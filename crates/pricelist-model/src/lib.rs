//! Data model for supplier price-list comparison.
//!
//! Suppliers own their products; consolidation and regrouping produce
//! read-only results consumed by the report layer.

pub mod consolidation;
pub mod enums;
pub mod grouping;
pub mod product;
pub mod supplier;

pub use consolidation::{
    ConsolidationResult, ConsolidationWarning, ProductComparison, SupplierPrice,
};
pub use enums::{HIGH_SPREAD_PERCENT, MEDIUM_SPREAD_PERCENT, SeverityBand};
pub use grouping::{NO_SUPPLIER_BUCKET, SupplierGrouping};
pub use product::Product;
pub use supplier::Supplier;
