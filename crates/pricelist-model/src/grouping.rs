//! Products regrouped by chosen supplier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Reserved bucket for products that no supplier priced.
pub const NO_SUPPLIER_BUCKET: &str = "sem_fornecedor";

/// Products grouped under the supplier offering the lowest price.
///
/// Every supplier named by the source document gets a bucket, even when it
/// wins no product. The [`NO_SUPPLIER_BUCKET`] bucket only exists when at
/// least one product had no price at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierGrouping {
    /// Supplier names in source column order.
    pub suppliers: Vec<String>,
    pub buckets: BTreeMap<String, Vec<Product>>,
}

impl SupplierGrouping {
    /// Registers a supplier bucket; repeated names share one bucket.
    pub fn add_supplier(&mut self, name: &str) {
        if !self.buckets.contains_key(name) {
            self.suppliers.push(name.to_string());
            self.buckets.insert(name.to_string(), Vec::new());
        }
    }

    /// Appends a product to the named bucket, creating it if needed.
    pub fn push(&mut self, bucket: &str, product: Product) {
        self.buckets
            .entry(bucket.to_string())
            .or_default()
            .push(product);
    }

    pub fn bucket(&self, name: &str) -> Option<&[Product]> {
        self.buckets.get(name).map(Vec::as_slice)
    }

    /// Products nobody priced, if any.
    pub fn unassigned(&self) -> Option<&[Product]> {
        self.bucket(NO_SUPPLIER_BUCKET)
    }

    /// Number of real supplier buckets, excluding [`NO_SUPPLIER_BUCKET`].
    pub fn supplier_count(&self) -> usize {
        self.buckets
            .keys()
            .filter(|name| name.as_str() != NO_SUPPLIER_BUCKET)
            .count()
    }

    /// Total number of products across all buckets.
    pub fn product_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Finds the bucket holding a product.
    pub fn bucket_of(&self, product: &str) -> Option<&str> {
        self.buckets
            .iter()
            .find(|(_, products)| products.iter().any(|p| p.name == product))
            .map(|(name, _)| name.as_str())
    }
}
