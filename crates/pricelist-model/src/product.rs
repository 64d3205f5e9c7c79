use serde::{Deserialize, Serialize};

/// A named item offered by one supplier.
///
/// `price` uses `0.0` as the absence sentinel: a product listed without a
/// usable price is kept (it still participates in product matching) but never
/// competes for best or worst price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Trimmed product name; the cross-supplier identity key.
    pub name: String,
    /// Quantity label exactly as published ("12 un", "1 cx").
    pub quantity: String,
    /// Unit price, `0.0` when no valid price was recorded.
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            price,
        }
    }

    /// Returns true when a positive price was recorded.
    pub fn is_priced(&self) -> bool {
        self.price > 0.0
    }

    /// Returns the price, or `None` for the absence sentinel.
    pub fn price(&self) -> Option<f64> {
        self.is_priced().then_some(self.price)
    }
}
