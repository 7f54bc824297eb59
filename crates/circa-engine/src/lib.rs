//! circa engine
//!
//! Turns free-form marketing text into a normalized integer estimate of
//! the sales volume it claims.
//!
//! # Overview
//!
//! Marketplace listings assert purchase volumes in loose phrasing —
//! "Mais de 4 mil compras no mês passado", "1K+ bought in past month".
//! The engine decides whether a snippet asserts such a claim and, if so,
//! computes a single integer estimate from it.
//!
//! # Architecture
//!
//! ```text
//! Text → Normalizer → Indicator gate → Quantity parser → Magnitude → Bias
//! ```
//!
//! # Key Features
//!
//! - **Indicator gating**: prices and ratings never parse as sales counts
//! - **Locale-aware numbers**: `.`/`,` decimal and thousands separators
//! - **Magnitude units**: "mil", "k", "thousand", "milhões", ...
//! - **Approximation uplift**: "more than N" claims are floors and are
//!   corrected upward by a tunable factor
//! - **Overridable vocabulary**: phrases, units, and qualifiers load from
//!   TOML without touching the parsing logic
//!
//! # Example Usage
//!
//! ```
//! use circa_engine::{EngineConfig, Extractor};
//!
//! # fn main() -> Result<(), circa_engine::EngineError> {
//! let extractor = Extractor::new(EngineConfig::default())?;
//!
//! let result = extractor.extract("Mais de 4 mil compras no mês passado");
//! assert!(result.found);
//! assert_eq!(result.estimate, 4_600);
//!
//! let result = extractor.extract("Preço: R$ 1.500");
//! assert!(!result.found);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod error;
mod extractor;
mod normalize;
mod parser;
mod resolve;
mod types;
mod vocabulary;


pub use config::{EngineConfig, BIAS_FACTOR};
pub use error::EngineError;
pub use extractor::Extractor;
pub use types::ExtractionResult;
pub use vocabulary::Vocabulary;
