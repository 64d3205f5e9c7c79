//! Cross-supplier consolidation.
//!
//! Builds one comparison row per product appearing in any supplier, picking
//! the lowest and highest positive prices and classifying the spread between
//! them. Supplier input order decides price ties: the earliest supplier wins.

use std::collections::BTreeSet;

use tracing::{info, info_span, warn};

use pricelist_model::{
    ConsolidationResult, ConsolidationWarning, ProductComparison, SeverityBand, Supplier,
    SupplierPrice,
};

use crate::error::{ConsolidationError, Result};

/// Largest number of suppliers one consolidation accepts.
pub const MAX_SUPPLIERS: usize = 15;

/// Consolidates supplier price lists into per-product comparisons.
///
/// Products are matched by exact name and emitted in lexicographic order.
/// Suppliers whose product count differs from the first supplier's are
/// reported as warnings; consolidation still proceeds.
pub fn consolidate(suppliers: &[Supplier]) -> Result<ConsolidationResult> {
    let _span = info_span!("consolidate", suppliers = suppliers.len()).entered();

    if suppliers.len() > MAX_SUPPLIERS {
        return Err(ConsolidationError::TooManySuppliers {
            count: suppliers.len(),
            max: MAX_SUPPLIERS,
        });
    }
    let Some(first) = suppliers.first() else {
        return Err(ConsolidationError::NoSuppliers);
    };

    let warnings = count_mismatches(first, &suppliers[1..]);

    let names: BTreeSet<&str> = suppliers
        .iter()
        .flat_map(|s| s.product_names())
        .collect();

    let products: Vec<ProductComparison> = names
        .into_iter()
        .map(|name| compare_product(name, suppliers))
        .collect();

    let result = ConsolidationResult {
        suppliers: suppliers.iter().map(|s| s.name().to_string()).collect(),
        products,
        warnings,
    };

    info!(
        products = result.products.len(),
        unpriced = result.unpriced_count(),
        warnings = result.warnings.len(),
        "consolidation complete"
    );
    Ok(result)
}

fn count_mismatches(first: &Supplier, rest: &[Supplier]) -> Vec<ConsolidationWarning> {
    let expected = first.product_count();
    rest.iter()
        .filter(|s| s.product_count() != expected)
        .map(|s| {
            let warning = ConsolidationWarning::ProductCountMismatch {
                supplier: s.name().to_string(),
                expected,
                found: s.product_count(),
            };
            warn!(supplier = %s.name(), expected, found = s.product_count(), "{warning}");
            warning
        })
        .collect()
}

fn compare_product(name: &str, suppliers: &[Supplier]) -> ProductComparison {
    let quantity = suppliers
        .iter()
        .find_map(|s| s.product(name))
        .map(|p| p.quantity.clone())
        .unwrap_or_default();

    let prices: Vec<SupplierPrice> = suppliers
        .iter()
        .map(|s| SupplierPrice {
            supplier: s.name().to_string(),
            price: s.price_of(name),
        })
        .collect();

    let mut best: Option<(f64, &str)> = None;
    let mut worst: Option<f64> = None;
    let mut priced = 0usize;
    for entry in &prices {
        let Some(price) = entry.price else {
            continue;
        };
        priced += 1;
        // Strict comparison keeps the earliest supplier on ties.
        if best.is_none_or(|(lowest, _)| price < lowest) {
            best = Some((price, entry.supplier.as_str()));
        }
        if worst.is_none_or(|highest| price > highest) {
            worst = Some(price);
        }
    }

    let best_price = best.map(|(price, _)| price);
    let best_supplier = best.map(|(_, supplier)| supplier.to_string());
    let (spread, spread_percent) = match (best_price, worst) {
        (Some(low), Some(high)) => {
            let spread = high - low;
            (Some(spread), Some(100.0 * spread / low))
        }
        _ => (None, None),
    };
    let band = if priced >= 2 {
        spread_percent.map(SeverityBand::classify)
    } else {
        None
    };

    ProductComparison {
        name: name.to_string(),
        quantity,
        prices,
        best_price,
        best_supplier,
        worst_price: worst,
        spread,
        spread_percent,
        band,
    }
}
