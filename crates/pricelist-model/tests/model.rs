//! Tests for pricelist-model types.

use pricelist_model::{
    ConsolidationResult, ConsolidationWarning, NO_SUPPLIER_BUCKET, Product, ProductComparison,
    SeverityBand, SupplierGrouping, SupplierPrice,
};

fn comparison(name: &str, band: Option<SeverityBand>, best: Option<f64>) -> ProductComparison {
    ProductComparison {
        name: name.to_string(),
        quantity: "1 un".to_string(),
        prices: vec![
            SupplierPrice {
                supplier: "A".to_string(),
                price: best,
            },
            SupplierPrice {
                supplier: "B".to_string(),
                price: None,
            },
        ],
        best_price: best,
        best_supplier: best.map(|_| "A".to_string()),
        worst_price: best,
        spread: best.map(|_| 0.0),
        spread_percent: best.map(|_| 0.0),
        band,
    }
}

#[test]
fn result_lookup_and_counts() {
    let result = ConsolidationResult {
        suppliers: vec!["A".to_string(), "B".to_string()],
        products: vec![
            comparison("Arroz", Some(SeverityBand::Low), Some(10.0)),
            comparison("Cafe", Some(SeverityBand::High), Some(12.0)),
            comparison("Sal", None, None),
        ],
        warnings: vec![],
    };

    assert_eq!(result.product("Cafe").map(|p| p.name.as_str()), Some("Cafe"));
    assert!(result.product("Feijao").is_none());
    assert_eq!(result.unpriced_count(), 1);
    assert_eq!(
        result.band_counts(),
        [
            (SeverityBand::Low, 1),
            (SeverityBand::Medium, 0),
            (SeverityBand::High, 1)
        ]
    );

    let arroz = result.product("Arroz").expect("Arroz present");
    assert_eq!(arroz.priced_suppliers(), 1);
    assert_eq!(arroz.price_for("A"), Some(10.0));
    assert_eq!(arroz.price_for("B"), None);
}

#[test]
fn grouping_excludes_reserved_bucket_from_supplier_count() {
    let mut grouping = SupplierGrouping::default();
    grouping.add_supplier("A");
    grouping.add_supplier("B");
    grouping.add_supplier("A");
    grouping.push("A", Product::new("Arroz", "5 kg", 20.0));
    grouping.push(NO_SUPPLIER_BUCKET, Product::new("Sal", "1 kg", 0.0));

    assert_eq!(grouping.suppliers, vec!["A", "B"]);
    assert_eq!(grouping.supplier_count(), 2);
    assert_eq!(grouping.product_count(), 2);
    assert_eq!(grouping.bucket("B").map(<[Product]>::len), Some(0));
    assert_eq!(grouping.unassigned().map(<[Product]>::len), Some(1));
    assert_eq!(grouping.bucket_of("Sal"), Some(NO_SUPPLIER_BUCKET));
    assert_eq!(grouping.bucket_of("Arroz"), Some("A"));
}

#[test]
fn result_serializes() {
    let result = ConsolidationResult {
        suppliers: vec!["A".to_string()],
        products: vec![comparison("Arroz", None, Some(10.0))],
        warnings: vec![ConsolidationWarning::ProductCountMismatch {
            supplier: "B".to_string(),
            expected: 2,
            found: 1,
        }],
    };
    let json = serde_json::to_string(&result).expect("serialize result");
    assert!(json.contains("\"kind\":\"product_count_mismatch\""));
    let round: ConsolidationResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
}
