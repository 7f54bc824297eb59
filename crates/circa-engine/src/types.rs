//! Match and result types for extraction

use serde::{Deserialize, Serialize};

/// A quantity-unit pattern located in normalized text
///
/// Produced once per extraction call by the parser and consumed
/// immediately by the magnitude resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityMatch {
    /// The number as it appeared in the text ("2,5", "1.500")
    pub raw_number: String,

    /// Numeric value after decimal-separator disambiguation
    pub value: f64,

    /// Matched unit alias, if any ("mil", "k")
    pub unit: Option<String>,

    /// Matched qualifier phrase, if any ("mais de", "over")
    pub qualifier: Option<String>,

    /// Whether the number carried a trailing "+"
    pub trailing_plus: bool,

    /// Byte span of the whole match within the normalized text
    pub span: (usize, usize),
}

impl QuantityMatch {
    /// Whether the claim is approximate rather than an exact count
    ///
    /// A qualifier phrase or a trailing "+" states a floor outright;
    /// a magnitude unit ("2.5 mil") is a rounded figure. Bare counts
    /// ("137 vendidos") are exact.
    pub fn is_approximate(&self) -> bool {
        self.qualifier.is_some() || self.trailing_plus || self.unit.is_some()
    }

    /// Validate the match invariants
    pub fn validate(&self) -> Result<(), String> {
        if !self.value.is_finite() {
            return Err(format!("value {} is not finite", self.value));
        }
        if self.value < 0.0 {
            return Err(format!("value {} is negative", self.value));
        }
        if self.span.0 > self.span.1 {
            return Err(format!("span ({}, {}) is inverted", self.span.0, self.span.1));
        }
        Ok(())
    }
}

/// Result of one extraction call
///
/// The only value exposed across the component boundary. `estimate` is
/// meaningful only when `found` is true; otherwise it is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether the text asserted a sales-volume claim
    pub found: bool,

    /// Normalized integer estimate of the claimed volume
    pub estimate: u64,
}

impl ExtractionResult {
    /// A successful extraction
    pub fn found(estimate: u64) -> Self {
        Self {
            found: true,
            estimate,
        }
    }

    /// No claim was found in the text
    pub fn not_found() -> Self {
        Self {
            found: false,
            estimate: 0,
        }
    }
}
