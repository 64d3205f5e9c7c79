//! Type-safe enumerations for consolidation output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spread percentage above which a product is flagged [`SeverityBand::Medium`].
pub const MEDIUM_SPREAD_PERCENT: f64 = 20.0;

/// Spread percentage above which a product is flagged [`SeverityBand::High`].
pub const HIGH_SPREAD_PERCENT: f64 = 50.0;

/// Classification of the spread between best and worst price.
///
/// - **Low**: spread of at most 20%
/// - **Medium**: more than 20% and at most 50%
/// - **High**: more than 50%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
}

impl SeverityBand {
    /// Classifies a spread percentage.
    pub fn classify(spread_percent: f64) -> Self {
        if spread_percent > HIGH_SPREAD_PERCENT {
            SeverityBand::High
        } else if spread_percent > MEDIUM_SPREAD_PERCENT {
            SeverityBand::Medium
        } else {
            SeverityBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Low => "LOW",
            SeverityBand::Medium => "MEDIUM",
            SeverityBand::High => "HIGH",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
