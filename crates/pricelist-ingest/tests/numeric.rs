//! Property tests for price normalization.

use proptest::prelude::*;

use pricelist_ingest::{ParseMode, format_number, normalize};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

/// Cells as suppliers actually type them: digits, separators, currency and noise.
fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r"(R\$ ?)?[0-9]{1,3}(\.[0-9]{3}){0,2}(,[0-9]{1,2})?%?",
        2 => r"[0-9]{1,7}(\.[0-9]{1,4})?",
        1 => r"[ -~]{0,20}",
        1 => Just(String::new()),
    ]
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn strict_reads_back_formatted_values(value in 0.0f64..1.0e12) {
        let parsed = normalize(&format_number(value), ParseMode::Strict).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn strict_reads_back_whole_values(value in 0u32..10_000_000) {
        let value = f64::from(value);
        let parsed = normalize(&format_number(value), ParseMode::Strict).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn tolerant_never_fails(cell in arb_cell()) {
        let parsed = normalize(&cell, ParseMode::Tolerant);
        prop_assert!(parsed.is_ok());
        let value = parsed.unwrap();
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    #[test]
    fn tolerant_accepts_arbitrary_text(cell in any::<String>()) {
        let value = normalize(&cell, ParseMode::Tolerant).unwrap();
        prop_assert!(value.is_finite() && value >= 0.0);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(normalize("1.234,56", ParseMode::Tolerant), Ok(1234.56));
    assert_eq!(normalize("12,5%", ParseMode::Tolerant), Ok(12.5));
    assert_eq!(normalize("", ParseMode::Strict), Ok(0.0));
}
