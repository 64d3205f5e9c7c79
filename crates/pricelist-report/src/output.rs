//! Report files on disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use pricelist_model::{ConsolidationResult, NO_SUPPLIER_BUCKET, SupplierGrouping};

use crate::context::{OutputFormat, ReportContext};
use crate::csv_writer::write_csv;
use crate::error::{ReportError, Result};
use crate::layout::{Table, consolidated_table, supplier_table};
use crate::xlsx_writer::write_xlsx;

/// What the output directory currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputState {
    /// Missing or empty: nothing has been consolidated yet.
    Empty,
    /// Holds only the consolidated sheet.
    Consolidated(PathBuf),
    /// Holds anything else.
    Populated { entries: usize },
}

/// A supplier file written by [`write_supplier_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierFile {
    pub bucket: String,
    pub products: usize,
    pub path: PathBuf,
}

/// Inspects the output directory to decide the next processing step.
pub fn output_state(ctx: &ReportContext) -> Result<OutputState> {
    let dir = &ctx.output_dir;
    if !dir.exists() {
        return Ok(OutputState::Empty);
    }
    let to_err = |source| ReportError::OutputDir {
        path: dir.clone(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(to_err)? {
        entries.push(entry.map_err(to_err)?.path());
    }

    Ok(match entries.as_slice() {
        [] => OutputState::Empty,
        [only] if only.is_file() && ctx.is_consolidated_file(only) => {
            OutputState::Consolidated(only.clone())
        }
        _ => OutputState::Populated {
            entries: entries.len(),
        },
    })
}

/// Writes the consolidated comparison sheet and returns its path.
pub fn write_consolidated(result: &ConsolidationResult, ctx: &ReportContext) -> Result<PathBuf> {
    let _span = info_span!("write_consolidated", format = %ctx.format).entered();
    ensure_output_dir(&ctx.output_dir)?;

    let table = consolidated_table(result, ctx);
    let path = ctx.consolidated_path();
    write_table(&path, &table, ctx)?;
    info!(
        path = %path.display(),
        products = table.rows.len(),
        "consolidated sheet written"
    );
    Ok(path)
}

/// Writes one file per supplier bucket, in bucket order.
///
/// Suppliers that won no product still get a file; the no-supplier bucket
/// comes last when present. File names never reuse the consolidated stem or
/// another bucket's name (compared case-insensitively); a colliding supplier
/// gets a numeric suffix instead.
pub fn write_supplier_files(grouping: &SupplierGrouping, ctx: &ReportContext) -> Result<Vec<SupplierFile>> {
    let _span = info_span!("write_supplier_files", format = %ctx.format).entered();
    ensure_output_dir(&ctx.output_dir)?;

    let unassigned = grouping.unassigned();
    let mut taken = HashSet::from([ctx.consolidated_stem.to_lowercase()]);
    if unassigned.is_some() {
        taken.insert(NO_SUPPLIER_BUCKET.to_lowercase());
    }

    let mut buckets = Vec::new();
    for name in &grouping.suppliers {
        if name == NO_SUPPLIER_BUCKET {
            continue;
        }
        if let Some(products) = grouping.bucket(name) {
            let stem = unique_stem(ctx, name, &mut taken);
            buckets.push((name.as_str(), stem, products));
        }
    }
    if let Some(products) = unassigned {
        buckets.push((NO_SUPPLIER_BUCKET, NO_SUPPLIER_BUCKET.to_string(), products));
    }

    let mut files = Vec::new();
    for (bucket, stem, products) in buckets {
        let table = supplier_table(bucket, products, ctx);
        let path = ctx.output_path(&stem);
        write_table(&path, &table, ctx)?;
        info!(
            supplier = %bucket,
            path = %path.display(),
            products = products.len(),
            "supplier file written"
        );
        files.push(SupplierFile {
            bucket: bucket.to_string(),
            products: products.len(),
            path,
        });
    }
    Ok(files)
}

/// Picks a free file stem for a supplier, suffixing `_1`, `_2`, ... on collision.
fn unique_stem(ctx: &ReportContext, supplier: &str, taken: &mut HashSet<String>) -> String {
    let base = ctx.file_stem(supplier);
    let mut stem = base.clone();
    let mut suffix = 0;
    while !taken.insert(stem.to_lowercase()) {
        suffix += 1;
        stem = format!("{base}_{suffix}");
    }
    if suffix > 0 {
        warn!(supplier = %supplier, file_stem = %stem, "supplier file name already taken, renaming");
    }
    stem
}

fn write_table(path: &Path, table: &Table, ctx: &ReportContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Csv => write_csv(path, table),
        OutputFormat::Xlsx => write_xlsx(path, table, &ctx.widths),
    }
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}
