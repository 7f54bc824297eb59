//! Text normalization
//!
//! Collapses raw listing snippets into one canonical surface form so the
//! downstream matcher only ever sees lower-cased, single-spaced text.

use std::fmt;

/// Text that has been passed through [`normalize`]
///
/// Only `normalize` produces values of this type; holding one guarantees
/// the canonical form (lower-cased, whitespace-collapsed, trimmed,
/// entity-decoded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// View the normalized text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the normalized text in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the normalized text is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw text snippet
///
/// Lower-cases, decodes HTML non-breaking-space entities to plain spaces,
/// collapses whitespace runs (including U+00A0) to a single space, and
/// trims. Idempotent: `normalize(normalize(x).as_str()) == normalize(x)`.
pub fn normalize(raw: &str) -> NormalizedText {
    let lowered = raw.to_lowercase();
    let decoded = lowered.replace("&nbsp;", " ").replace("&#160;", " ");
    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    NormalizedText(collapsed)
}
