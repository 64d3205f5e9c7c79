use std::path::PathBuf;

use serde::Serialize;

use pricelist_model::{ConsolidationWarning, SeverityBand};

/// Per-supplier line of the consolidation summary.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierSummary {
    pub name: String,
    pub products: usize,
    pub priced_products: usize,
    /// Lists a different number of products than the first supplier.
    pub count_mismatch: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailureSummary {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ConsolidateOutcome {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub documents: usize,
    pub suppliers: Vec<SupplierSummary>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<DocumentFailureSummary>,
    pub products: usize,
    pub unpriced_products: usize,
    pub bands: Vec<(SeverityBand, usize)>,
    pub warnings: Vec<ConsolidationWarning>,
}

impl ConsolidateOutcome {
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// One written supplier bucket.
#[derive(Debug, Clone, Serialize)]
pub struct BucketSummary {
    pub supplier: String,
    pub products: usize,
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct RegroupOutcome {
    pub source: PathBuf,
    pub supplier_count: usize,
    pub buckets: Vec<BucketSummary>,
    /// Products no supplier priced.
    pub unassigned_products: usize,
}

/// What the automatic mode did.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunOutcome {
    Consolidate(ConsolidateOutcome),
    Regroup(RegroupOutcome),
}

impl RunOutcome {
    pub fn has_errors(&self) -> bool {
        match self {
            Self::Consolidate(outcome) => outcome.has_errors(),
            Self::Regroup(_) => false,
        }
    }
}
