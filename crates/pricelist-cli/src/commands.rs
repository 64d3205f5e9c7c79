use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use pricelist_core::{consolidate, load_suppliers};
use pricelist_ingest::{ingest_global, list_documents, open_document};
use pricelist_model::ConsolidationWarning;
use pricelist_report::{
    OutputState, ReportContext, output_state, write_consolidated, write_supplier_files,
};

use crate::cli::{ConsolidateArgs, RegroupArgs, RunArgs};
use crate::types::{
    BucketSummary, ConsolidateOutcome, DocumentFailureSummary, RegroupOutcome, RunOutcome,
    SupplierSummary,
};

pub fn run_consolidate(args: &ConsolidateArgs) -> Result<ConsolidateOutcome> {
    consolidate_folder(&args.folder, &args.output.report_context())
}

pub fn run_regroup(args: &RegroupArgs) -> Result<RegroupOutcome> {
    regroup_file(&args.file, &args.output.report_context())
}

/// Consolidates when the output directory is empty and regroups when it
/// holds only the consolidated sheet.
pub fn run_auto(args: &RunArgs) -> Result<RunOutcome> {
    let ctx = args.output.report_context();
    let state = output_state(&ctx).context("inspect output directory")?;
    match state {
        OutputState::Empty => {
            info!(output_dir = %ctx.output_dir.display(), "output directory empty, consolidating");
            consolidate_folder(&args.folder, &ctx).map(RunOutcome::Consolidate)
        }
        OutputState::Consolidated(path) => {
            info!(file = %path.display(), "consolidated sheet found, regrouping");
            regroup_file(&path, &ctx).map(RunOutcome::Regroup)
        }
        OutputState::Populated { entries } => bail!(
            "output directory {} already holds {entries} entries; \
             remove everything except the consolidated sheet and run again",
            ctx.output_dir.display()
        ),
    }
}

fn consolidate_folder(folder: &Path, ctx: &ReportContext) -> Result<ConsolidateOutcome> {
    let span = info_span!("consolidate_folder", folder = %folder.display());
    let _guard = span.enter();

    let documents = list_documents(folder)
        .with_context(|| format!("list price lists in {}", folder.display()))?;
    info!(count = documents.len(), "price lists found");

    let batch = load_suppliers(&documents);
    let result = consolidate(&batch.suppliers).context("consolidate suppliers")?;
    let output = write_consolidated(&result, ctx).context("write consolidated sheet")?;

    let suppliers = batch
        .suppliers
        .iter()
        .map(|supplier| SupplierSummary {
            name: supplier.name().to_string(),
            products: supplier.product_count(),
            priced_products: supplier.total_priced_products(),
            count_mismatch: result.warnings.iter().any(|warning| {
                matches!(
                    warning,
                    ConsolidationWarning::ProductCountMismatch { supplier: name, .. }
                        if name == supplier.name()
                )
            }),
        })
        .collect();
    let failures = batch
        .failures
        .iter()
        .map(|failure| DocumentFailureSummary {
            path: failure.path.clone(),
            error: failure.error.to_string(),
        })
        .collect();

    Ok(ConsolidateOutcome {
        input_dir: folder.to_path_buf(),
        output,
        documents: documents.len(),
        suppliers,
        skipped: batch.skipped,
        failures,
        products: result.products.len(),
        unpriced_products: result.unpriced_count(),
        bands: result.band_counts().to_vec(),
        warnings: result.warnings,
    })
}

fn regroup_file(file: &Path, ctx: &ReportContext) -> Result<RegroupOutcome> {
    let span = info_span!("regroup_file", file = %file.display());
    let _guard = span.enter();

    let doc = open_document(file).with_context(|| format!("open {}", file.display()))?;
    let grouping = ingest_global(doc.as_ref()).context("read consolidated sheet")?;
    let files = write_supplier_files(&grouping, ctx).context("write supplier files")?;

    let buckets = files
        .into_iter()
        .map(|written| BucketSummary {
            supplier: written.bucket,
            products: written.products,
            path: written.path,
        })
        .collect();

    Ok(RegroupOutcome {
        source: file.to_path_buf(),
        supplier_count: grouping.supplier_count(),
        buckets,
        unassigned_products: grouping.unassigned().map_or(0, <[_]>::len),
    })
}
