//! Numeric normalization for price cells.
//!
//! Supplier sheets mix locales and decorations: `1.234,56`, `R$ 12,90`,
//! `12,5%`. A comma always marks the decimal separator; periods next to a
//! comma are thousands separators.

use tracing::warn;

use crate::error::NormalizeError;

/// How malformed cells are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop every character other than digits and periods; failures become absence.
    #[default]
    Tolerant,
    /// Parse as written; failures are errors. Used for sheets this tool wrote.
    Strict,
}

/// Parses a raw cell into a price.
///
/// Empty cells are absence (`0.0`). In [`ParseMode::Tolerant`] a cell that
/// still fails to parse is logged and also treated as absence, so tolerant
/// parsing never returns an error.
pub fn normalize(raw: &str, mode: ParseMode) -> Result<f64, NormalizeError> {
    match parse_number(raw, mode) {
        Ok(value) => Ok(value),
        Err(error) if mode == ParseMode::Tolerant => {
            warn!(raw = %raw, %error, "invalid number format, treating as absent");
            Ok(0.0)
        }
        Err(error) => Err(error),
    }
}

fn parse_number(raw: &str, mode: ParseMode) -> Result<f64, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let mut value = if trimmed.contains(',') {
        trimmed.replace('.', "").replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };
    if let Some(stripped) = value.strip_suffix('%') {
        value = stripped.trim_end().to_string();
    }
    if mode == ParseMode::Tolerant {
        value.retain(|ch| ch.is_ascii_digit() || ch == '.');
        if value.is_empty() {
            return Ok(0.0);
        }
    }

    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| NormalizeError::InvalidNumberFormat {
            raw: raw.to_string(),
        })
}

/// Formats a price the way [`ParseMode::Strict`] reads it back.
///
/// Whole numbers carry no decimal point (`8`), others use the shortest
/// representation that round-trips (`1234.56`).
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tolerant(raw: &str) -> f64 {
        normalize(raw, ParseMode::Tolerant).unwrap()
    }

    fn strict(raw: &str) -> Result<f64, NormalizeError> {
        normalize(raw, ParseMode::Strict)
    }

    #[test]
    fn test_empty_is_absence() {
        assert_eq!(tolerant(""), 0.0);
        assert_eq!(tolerant("   "), 0.0);
        assert_eq!(strict(""), Ok(0.0));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(tolerant("1.234,56"), 1234.56);
        assert_eq!(tolerant("12,5"), 12.5);
        assert_eq!(strict("1.234.567,8"), Ok(1234567.8));
    }

    #[test]
    fn test_percent_sign() {
        assert_eq!(tolerant("12,5%"), 12.5);
        assert_eq!(strict("12,5%"), Ok(12.5));
        assert_eq!(strict("40 %"), Ok(40.0));
    }

    #[test]
    fn test_tolerant_strips_currency_noise() {
        assert_eq!(tolerant("R$ 1.234,56"), 1234.56);
        assert_eq!(tolerant("US$ 9.90"), 9.9);
        assert_eq!(tolerant("-5"), 5.0);
        assert_eq!(tolerant("sob consulta"), 0.0);
    }

    #[test]
    fn test_tolerant_failure_degrades_to_absence() {
        assert_eq!(tolerant("1.2.3"), 0.0);
        assert_eq!(tolerant("."), 0.0);
    }

    #[test]
    fn test_strict_rejects_noise() {
        assert_eq!(
            strict("R$ 10"),
            Err(NormalizeError::InvalidNumberFormat {
                raw: "R$ 10".to_string()
            })
        );
        assert!(strict("1.2.3").is_err());
        assert!(strict("inf").is_err());
        assert!(strict("NaN").is_err());
    }

    #[test]
    fn test_plain_period_is_decimal_point() {
        assert_eq!(strict("8.5"), Ok(8.5));
        assert_eq!(tolerant("1234.56"), 1234.56);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(1234.56), "1234.56");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }
}
