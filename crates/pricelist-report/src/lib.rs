//! Report generation for price consolidation.
//!
//! Renders results in two layouts:
//!
//! - **Consolidated sheet**: one row per product with every supplier's price
//!   and the best/worst comparison (`resultado_geral`)
//! - **Supplier files**: one file per regrouped supplier bucket
//!
//! Both layouts are written as CSV or XLSX according to the
//! [`ReportContext`].

mod context;
mod csv_writer;
mod error;
mod layout;
mod output;
mod xlsx_writer;

pub use context::{
    CONSOLIDATED_SHEET, CONSOLIDATED_STEM, ColumnLabels, ColumnWidths, DEFAULT_OUTPUT_DIR,
    OutputFormat, ReportContext,
};
pub use error::{ReportError, Result};
pub use layout::{Cell, SEPARATOR_COLUMNS, Table, consolidated_table, supplier_table};
pub use output::{
    OutputState, SupplierFile, output_state, write_consolidated, write_supplier_files,
};
