//! Magnitude resolution and approximation bias correction

use crate::error::EngineError;
use crate::types::QuantityMatch;
use crate::vocabulary::Vocabulary;

/// Convert a match into a base integer count
///
/// Scales the parsed value by the unit multiplier (absent unit scales by
/// 1) and rounds half away from zero. Products that leave the finite
/// non-negative u64 range are malformed.
pub fn resolve_magnitude(m: &QuantityMatch, vocab: &Vocabulary) -> Result<u64, EngineError> {
    let multiplier = match m.unit.as_deref() {
        Some(alias) => vocab.multiplier(alias),
        None => 1,
    };

    let scaled = m.value * multiplier as f64;
    if !scaled.is_finite() || scaled < 0.0 {
        return Err(EngineError::MalformedNumber(m.raw_number.clone()));
    }

    let rounded = scaled.round();
    if rounded > u64::MAX as f64 {
        return Err(EngineError::MalformedNumber(m.raw_number.clone()));
    }
    Ok(rounded as u64)
}

/// Apply the approximation uplift to a base count
///
/// Approximate claims ("more than N", "N+", round "N mil" figures) state
/// floors, so the estimate is corrected upward: `floor(base × factor)`.
/// Exact counts pass through unchanged.
pub fn apply_bias(base: u64, approximate: bool, factor: f64) -> u64 {
    if !approximate {
        return base;
    }
    (base as f64 * factor).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BIAS_FACTOR;

    fn quantity(value: f64, unit: Option<&str>) -> QuantityMatch {
        QuantityMatch {
            raw_number: value.to_string(),
            value,
            unit: unit.map(String::from),
            qualifier: None,
            trailing_plus: false,
            span: (0, 0),
        }
    }

    #[test]
    fn test_thousand_unit_scales() {
        let vocab = Vocabulary::default();
        assert_eq!(resolve_magnitude(&quantity(4.0, Some("mil")), &vocab).unwrap(), 4_000);
        assert_eq!(resolve_magnitude(&quantity(2.5, Some("k")), &vocab).unwrap(), 2_500);
    }

    #[test]
    fn test_million_unit_scales() {
        let vocab = Vocabulary::default();
        assert_eq!(
            resolve_magnitude(&quantity(1.2, Some("milhões")), &vocab).unwrap(),
            1_200_000
        );
    }

    #[test]
    fn test_absent_unit_scales_by_one() {
        let vocab = Vocabulary::default();
        assert_eq!(resolve_magnitude(&quantity(137.0, None), &vocab).unwrap(), 137);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let vocab = Vocabulary::default();
        assert_eq!(resolve_magnitude(&quantity(0.5, None), &vocab).unwrap(), 1);
        assert_eq!(resolve_magnitude(&quantity(2.4, None), &vocab).unwrap(), 2);
    }

    #[test]
    fn test_overflowing_product_is_malformed() {
        let vocab = Vocabulary::default();
        let result = resolve_magnitude(&quantity(1e300, Some("milhões")), &vocab);
        assert!(matches!(result, Err(EngineError::MalformedNumber(_))));
    }

    #[test]
    fn test_bias_applied_to_approximate_claims() {
        assert_eq!(apply_bias(4_000, true, BIAS_FACTOR), 4_600);
        assert_eq!(apply_bias(5_000, true, BIAS_FACTOR), 5_750);
        assert_eq!(apply_bias(2_500, true, BIAS_FACTOR), 2_875);
        assert_eq!(apply_bias(1_000, true, BIAS_FACTOR), 1_150);
    }

    #[test]
    fn test_exact_claims_pass_through() {
        assert_eq!(apply_bias(137, false, BIAS_FACTOR), 137);
    }
}
