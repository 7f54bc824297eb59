//! Core extraction orchestration

use crate::config::EngineConfig;
use crate::detector::contains_sales_indicator;
use crate::error::EngineError;
use crate::normalize::normalize;
use crate::parser::QuantityParser;
use crate::resolve::{apply_bias, resolve_magnitude};
use crate::types::ExtractionResult;
use tracing::{debug, warn};

/// The extraction engine
///
/// Holds the validated configuration and the compiled parser; construction
/// is the only fallible step. Stateless across calls and safe to share
/// between threads.
pub struct Extractor {
    config: EngineConfig,
    parser: QuantityParser,
}

impl Extractor {
    /// Build an extractor from a configuration
    ///
    /// Canonicalizes the vocabulary, validates the configuration, and
    /// compiles the quantity pattern once.
    pub fn new(mut config: EngineConfig) -> Result<Self, EngineError> {
        config.vocabulary.canonicalize();
        config.validate().map_err(EngineError::Config)?;
        let parser = QuantityParser::new(&config.vocabulary)?;
        Ok(Self { config, parser })
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract a sales-volume estimate from a text snippet
    ///
    /// Normalizes the input, gates on the indicator detector, parses the
    /// first quantity pattern, resolves its magnitude, and applies the
    /// approximation uplift. Every failure path degrades to
    /// `{found: false, estimate: 0}`; this method never panics and never
    /// returns an error.
    pub fn extract(&self, raw: &str) -> ExtractionResult {
        let text = normalize(raw);

        if !contains_sales_indicator(&text, &self.config.vocabulary) {
            debug!("No sales indicator in input, skipping extraction");
            return ExtractionResult::not_found();
        }

        let quantity = match self.parser.parse(&text) {
            Ok(Some(quantity)) => quantity,
            Ok(None) => {
                debug!("Sales indicator present but no quantity pattern found");
                return ExtractionResult::not_found();
            }
            Err(e) => {
                warn!("Discarding unparseable quantity: {}", e);
                return ExtractionResult::not_found();
            }
        };

        let base = match resolve_magnitude(&quantity, &self.config.vocabulary) {
            Ok(base) => base,
            Err(e) => {
                warn!("Discarding unresolvable quantity: {}", e);
                return ExtractionResult::not_found();
            }
        };

        let estimate = apply_bias(base, quantity.is_approximate(), self.config.bias_factor);

        debug!(
            "Extracted estimate {} from '{}' (base {}, approximate: {})",
            estimate,
            quantity.raw_number,
            base,
            quantity.is_approximate()
        );

        ExtractionResult::found(estimate)
    }
}
