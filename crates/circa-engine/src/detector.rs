//! Sales-indicator detection
//!
//! The gate in front of the parser: numeric text with no sales cue
//! (prices, ratings) must never reach extraction.

use crate::normalize::NormalizedText;
use crate::vocabulary::Vocabulary;

/// Whether any indicator phrase occurs as a substring of the text
///
/// Entries and text are both lower-cased, so a plain substring scan is a
/// case-insensitive match. Listing snippets stay under a few hundred
/// characters, so the naive scan is enough.
pub fn contains_sales_indicator(text: &NormalizedText, vocab: &Vocabulary) -> bool {
    vocab
        .indicator_phrases
        .iter()
        .any(|phrase| text.as_str().contains(phrase.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_detects_portuguese_indicator() {
        let vocab = Vocabulary::default();
        let text = normalize("Mais de 4 mil compras no mês passado");
        assert!(contains_sales_indicator(&text, &vocab));
    }

    #[test]
    fn test_detects_english_indicator() {
        let vocab = Vocabulary::default();
        let text = normalize("1K+ bought in past month");
        assert!(contains_sales_indicator(&text, &vocab));
    }

    #[test]
    fn test_price_text_is_not_a_claim() {
        let vocab = Vocabulary::default();
        let text = normalize("Preço: R$ 1.500");
        assert!(!contains_sales_indicator(&text, &vocab));
    }

    #[test]
    fn test_indicator_matches_regardless_of_case_in_raw_text() {
        let vocab = Vocabulary::default();
        let text = normalize("2 MIL VENDIDOS");
        assert!(contains_sales_indicator(&text, &vocab));
    }

    #[test]
    fn test_empty_text_has_no_indicator() {
        let vocab = Vocabulary::default();
        assert!(!contains_sales_indicator(&normalize(""), &vocab));
    }
}
