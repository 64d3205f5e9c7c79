//! Cross-supplier comparison results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::SeverityBand;

/// Price offered by one supplier for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierPrice {
    pub supplier: String,
    /// `None` when the supplier does not list the product or lists it unpriced.
    pub price: Option<f64>,
}

/// Cross-supplier comparison for a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComparison {
    pub name: String,
    /// Quantity label from the first supplier (input order) listing the product.
    pub quantity: String,
    /// One entry per supplier, in supplier input order.
    pub prices: Vec<SupplierPrice>,
    pub best_price: Option<f64>,
    pub best_supplier: Option<String>,
    pub worst_price: Option<f64>,
    /// `worst_price - best_price`.
    pub spread: Option<f64>,
    /// `100 * spread / best_price`.
    pub spread_percent: Option<f64>,
    /// Unclassified when fewer than two suppliers priced the product.
    pub band: Option<SeverityBand>,
}

impl ProductComparison {
    /// Number of suppliers offering a positive price.
    pub fn priced_suppliers(&self) -> usize {
        self.prices.iter().filter(|p| p.price.is_some()).count()
    }

    /// Price offered by the named supplier.
    pub fn price_for(&self, supplier: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|p| p.supplier == supplier)
            .and_then(|p| p.price)
    }
}

/// Non-fatal observation recorded while consolidating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsolidationWarning {
    /// A supplier lists a different number of products than the first supplier.
    ProductCountMismatch {
        supplier: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ConsolidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductCountMismatch {
                supplier,
                expected,
                found,
            } => write!(
                f,
                "supplier '{supplier}' lists {found} products, first supplier lists {expected}"
            ),
        }
    }
}

/// Output of the consolidation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationResult {
    /// Supplier names in input order.
    pub suppliers: Vec<String>,
    /// Products sorted lexicographically by name.
    pub products: Vec<ProductComparison>,
    pub warnings: Vec<ConsolidationWarning>,
}

impl ConsolidationResult {
    /// Looks up a product comparison by exact name.
    pub fn product(&self, name: &str) -> Option<&ProductComparison> {
        self.products
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.products[idx])
    }

    /// Number of products assigned to each band, in band order.
    pub fn band_counts(&self) -> [(SeverityBand, usize); 3] {
        let count = |band| {
            self.products
                .iter()
                .filter(|p| p.band == Some(band))
                .count()
        };
        [
            (SeverityBand::Low, count(SeverityBand::Low)),
            (SeverityBand::Medium, count(SeverityBand::Medium)),
            (SeverityBand::High, count(SeverityBand::High)),
        ]
    }

    /// Number of products no supplier priced.
    pub fn unpriced_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| p.best_price.is_none())
            .count()
    }
}
