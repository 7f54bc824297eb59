//! Quantity-unit pattern parsing
//!
//! Locates the first quantity claim in normalized text and decomposes it
//! into a structured match. The grammar, leftmost match wins:
//!
//! ```text
//! [qualifier-phrase]? digits[.,digits]* ["+"]? [unit-alias]? ["+"]?
//! ```
//!
//! The trailing "+" may sit on either side of the unit ("5+ mil", "1k+")
//! and scores as an approximation qualifier, not a unit.

use crate::error::EngineError;
use crate::normalize::NormalizedText;
use crate::types::QuantityMatch;
use crate::vocabulary::Vocabulary;
use regex::Regex;

/// Parser for quantity-unit patterns
///
/// Compiles one pattern from the vocabulary at construction and reuses it
/// for every call.
pub struct QuantityParser {
    pattern: Regex,
}

impl QuantityParser {
    /// Build a parser for the given vocabulary
    pub fn new(vocab: &Vocabulary) -> Result<Self, EngineError> {
        let mut pattern = String::from(r"\b");

        if !vocab.approx_qualifiers.is_empty() {
            pattern.push_str(&format!(
                r"(?:(?P<qual>{})\s*)?",
                alternation(&vocab.approx_qualifiers)
            ));
        }

        pattern.push_str(r"(?P<num>[0-9]+(?:[.,][0-9]+)*)");
        pattern.push_str(r"(?:\s*(?P<plus_pre>\+))?");

        if !vocab.unit_aliases.is_empty() {
            let aliases: Vec<String> = vocab.unit_aliases.keys().cloned().collect();
            pattern.push_str(&format!(r"(?:\s*(?P<unit>{})\b)?", alternation(&aliases)));
        }

        pattern.push_str(r"(?:\s*(?P<plus_post>\+))?");

        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Locate the first quantity pattern in the text
    ///
    /// Returns `Ok(None)` when no digit sequence is present. Returns
    /// [`EngineError::MalformedNumber`] when a digit sequence was found
    /// but does not convert to a finite non-negative value; callers can
    /// then distinguish "no claim" from "claim present but unparseable".
    pub fn parse(&self, text: &NormalizedText) -> Result<Option<QuantityMatch>, EngineError> {
        let Some(caps) = self.pattern.captures(text.as_str()) else {
            return Ok(None);
        };

        let overall = caps.get(0).unwrap();
        let raw_number = caps.name("num").unwrap().as_str().to_string();
        let value = parse_decimal(&raw_number)?;

        let quantity = QuantityMatch {
            value,
            unit: caps.name("unit").map(|m| m.as_str().to_string()),
            qualifier: caps.name("qual").map(|m| m.as_str().to_string()),
            trailing_plus: caps.name("plus_pre").is_some() || caps.name("plus_post").is_some(),
            span: (overall.start(), overall.end()),
            raw_number,
        };
        quantity
            .validate()
            .map_err(EngineError::MalformedNumber)?;

        Ok(Some(quantity))
    }
}

/// Join vocabulary entries into a regex alternation, longest first
///
/// Longest-first ordering keeps prefixes from shadowing longer entries
/// ("mil" must not win over "milhões").
fn alternation(entries: &[String]) -> String {
    let mut escaped: Vec<String> = entries.iter().map(|e| regex::escape(e)).collect();
    escaped.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    escaped.join("|")
}

/// Convert a matched digit string to a value
///
/// Locale ambiguity between `.` and `,` is resolved by treating the last
/// separator followed by at most two trailing digits as the decimal
/// point; every other separator is a thousands separator and stripped.
/// So "2,5" is 2.5, "1.500" is 1500, and "1.234,56" is 1234.56.
fn parse_decimal(raw: &str) -> Result<f64, EngineError> {
    let malformed = |raw: &str| EngineError::MalformedNumber(raw.to_string());

    let digits_of = |s: &str| -> String { s.chars().filter(char::is_ascii_digit).collect() };

    let candidate = match raw.rfind(['.', ',']) {
        None => raw.to_string(),
        Some(idx) => {
            let fraction = &raw[idx + 1..];
            if fraction.len() <= 2 {
                format!("{}.{}", digits_of(&raw[..idx]), fraction)
            } else {
                digits_of(raw)
            }
        }
    };

    let value: f64 = candidate.parse().map_err(|_| malformed(raw))?;
    if !value.is_finite() || value < 0.0 {
        return Err(malformed(raw));
    }
    Ok(value)
}
