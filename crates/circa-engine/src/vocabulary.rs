//! Recognized vocabulary: indicator phrases, unit aliases, qualifiers
//!
//! The vocabulary is loaded once and read many times; extending it means
//! adding entries here or in a TOML override, never touching the parsing
//! logic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The static vocabulary the engine recognizes
///
/// All matching is done against normalized (lower-cased) text, so entries
/// are canonicalized to lowercase before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Sales-claim cues, matched as substrings ("compras", "sold", ...)
    pub indicator_phrases: Vec<String>,

    /// Magnitude suffixes mapped to their multiplier ("mil" -> 1000)
    pub unit_aliases: BTreeMap<String, u64>,

    /// Phrases marking the number as a floor ("mais de", "over", ...)
    ///
    /// A trailing "+" on the number is also treated as a qualifier; it is
    /// recognized by the parser directly and is not listed here.
    pub approx_qualifiers: Vec<String>,
}

impl Vocabulary {
    /// Look up the multiplier for a unit alias; an absent unit counts as 1
    pub fn multiplier(&self, alias: &str) -> u64 {
        self.unit_aliases.get(alias).copied().unwrap_or(1)
    }

    /// Lower-case and trim every entry
    ///
    /// Deserialized vocabularies may carry arbitrary casing; matching only
    /// ever happens against lower-cased text.
    pub fn canonicalize(&mut self) {
        for phrase in &mut self.indicator_phrases {
            *phrase = phrase.trim().to_lowercase();
        }
        for qualifier in &mut self.approx_qualifiers {
            *qualifier = qualifier.trim().to_lowercase();
        }
        let aliases: BTreeMap<String, u64> = self
            .unit_aliases
            .iter()
            .map(|(alias, &mult)| (alias.trim().to_lowercase(), mult))
            .collect();
        self.unit_aliases = aliases;
    }

    /// Validate the vocabulary
    pub fn validate(&self) -> Result<(), String> {
        if self.indicator_phrases.is_empty() {
            return Err("indicator_phrases must not be empty".to_string());
        }
        if self.indicator_phrases.iter().any(|p| p.trim().is_empty()) {
            return Err("indicator_phrases must not contain empty entries".to_string());
        }
        if self.approx_qualifiers.iter().any(|q| q.trim().is_empty()) {
            return Err("approx_qualifiers must not contain empty entries".to_string());
        }
        for (alias, &mult) in &self.unit_aliases {
            if alias.trim().is_empty() {
                return Err("unit_aliases must not contain empty aliases".to_string());
            }
            if mult == 0 {
                return Err(format!("unit alias '{}' has a zero multiplier", alias));
            }
        }
        Ok(())
    }
}

impl Default for Vocabulary {
    /// Built-in Portuguese/English vocabulary
    fn default() -> Self {
        Self {
            indicator_phrases: [
                "compras",
                "vendidos",
                "vendidas",
                "vendas",
                "sold",
                "bought",
                "orders",
                "buyers",
                "purchases",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            unit_aliases: [
                ("mil", 1_000),
                ("k", 1_000),
                ("thousand", 1_000),
                ("milhão", 1_000_000),
                ("milhões", 1_000_000),
                ("mi", 1_000_000),
                ("million", 1_000_000),
            ]
            .into_iter()
            .map(|(alias, mult)| (alias.to_string(), mult))
            .collect(),
            approx_qualifiers: ["mais de", "acima de", "more than", "over"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_valid() {
        let vocab = Vocabulary::default();
        assert!(vocab.validate().is_ok());
    }

    #[test]
    fn test_multiplier_lookup() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.multiplier("mil"), 1_000);
        assert_eq!(vocab.multiplier("k"), 1_000);
        assert_eq!(vocab.multiplier("milhões"), 1_000_000);
    }

    #[test]
    fn test_unknown_alias_multiplies_by_one() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.multiplier("unidades"), 1);
    }

    #[test]
    fn test_canonicalize_lowercases_entries() {
        let mut vocab = Vocabulary {
            indicator_phrases: vec!["Vendidos ".to_string()],
            unit_aliases: [(" MIL".to_string(), 1_000)].into_iter().collect(),
            approx_qualifiers: vec!["Mais De".to_string()],
        };
        vocab.canonicalize();
        assert_eq!(vocab.indicator_phrases, vec!["vendidos"]);
        assert_eq!(vocab.multiplier("mil"), 1_000);
        assert_eq!(vocab.approx_qualifiers, vec!["mais de"]);
    }

    #[test]
    fn test_empty_indicator_list_rejected() {
        let mut vocab = Vocabulary::default();
        vocab.indicator_phrases.clear();
        assert!(vocab.validate().is_err());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let mut vocab = Vocabulary::default();
        vocab.unit_aliases.insert("dúzia".to_string(), 0);
        assert!(vocab.validate().is_err());
    }
}
