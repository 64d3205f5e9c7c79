//! Supplier price lists.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::product::Product;

/// One supplier's price list, keyed by product name.
///
/// The priced-product counter is maintained on every insert so that it always
/// matches the number of products with a positive price, including when a
/// duplicate name overwrites an earlier row.
#[derive(Debug, Clone, Serialize)]
pub struct Supplier {
    name: String,
    products: BTreeMap<String, Product>,
    total_priced_products: usize,
}

impl Supplier {
    /// Creates an empty supplier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: BTreeMap::new(),
            total_priced_products: 0,
        }
    }

    /// Supplier name derived from its source document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a product, replacing any previous product with the same name.
    ///
    /// Last write wins. Returns the replaced product, if any.
    pub fn insert_product(&mut self, product: Product) -> Option<Product> {
        if product.is_priced() {
            self.total_priced_products += 1;
        }
        let replaced = self.products.insert(product.name.clone(), product);
        if let Some(old) = &replaced
            && old.is_priced()
        {
            self.total_priced_products -= 1;
        }
        replaced
    }

    /// Looks up a product by exact name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Products ordered by name.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Product names ordered lexicographically.
    pub fn product_names(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Number of distinct products listed.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of products with a positive price.
    pub fn total_priced_products(&self) -> usize {
        self.total_priced_products
    }

    /// Returns the recorded price for a product, `None` when the product is
    /// missing or unpriced.
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.products.get(name).and_then(Product::price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced_count(supplier: &Supplier) -> usize {
        supplier.products().filter(|p| p.is_priced()).count()
    }

    #[test]
    fn counter_tracks_priced_products() {
        let mut supplier = Supplier::new("Atacado");
        supplier.insert_product(Product::new("Arroz", "5 kg", 21.9));
        supplier.insert_product(Product::new("Feijao", "1 kg", 0.0));
        assert_eq!(supplier.product_count(), 2);
        assert_eq!(supplier.total_priced_products(), 1);
        assert_eq!(supplier.total_priced_products(), priced_count(&supplier));
    }

    #[test]
    fn overwrite_keeps_counter_consistent() {
        let mut supplier = Supplier::new("Atacado");
        supplier.insert_product(Product::new("Arroz", "5 kg", 21.9));
        let replaced = supplier.insert_product(Product::new("Arroz", "5 kg", 0.0));
        assert_eq!(replaced.map(|p| p.price), Some(21.9));
        assert_eq!(supplier.total_priced_products(), 0);

        supplier.insert_product(Product::new("Arroz", "1 fardo", 19.5));
        supplier.insert_product(Product::new("Arroz", "1 fardo", 18.0));
        assert_eq!(supplier.product_count(), 1);
        assert_eq!(supplier.total_priced_products(), 1);
        assert_eq!(supplier.price_of("Arroz"), Some(18.0));
    }

    #[test]
    fn unpriced_product_has_no_price() {
        let mut supplier = Supplier::new("Atacado");
        supplier.insert_product(Product::new("Sal", "1 kg", 0.0));
        assert!(supplier.product("Sal").is_some());
        assert_eq!(supplier.price_of("Sal"), None);
        assert_eq!(supplier.price_of("Acucar"), None);
    }
}
