//! Error types for the extraction engine

use thiserror::Error;

/// Errors that can occur inside the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// A numeric-looking token could not be converted to a finite
    /// non-negative value
    #[error("Malformed number: {0}")]
    MalformedNumber(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The vocabulary produced a pattern the regex engine rejected
    #[error("Pattern error: {0}")]
    Pattern(String),
}

impl From<regex::Error> for EngineError {
    fn from(e: regex::Error) -> Self {
        EngineError::Pattern(e.to_string())
    }
}
