//! Configuration for the extraction engine

use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// Tunable constant for the approximation uplift (default: 1.15)
///
/// "More than N" phrasing understates the true count; this factor is the
/// assumed average understatement. It is a policy constant, not derived
/// from the input.
pub const BIAS_FACTOR: f64 = 1.15;

/// Configuration for the extraction engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Uplift applied to approximate claims
    pub bias_factor: f64,

    /// Recognized vocabulary
    pub vocabulary: Vocabulary,
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.bias_factor.is_finite() {
            return Err("bias_factor must be finite".to_string());
        }
        if self.bias_factor < 1.0 {
            return Err("bias_factor must be at least 1.0".to_string());
        }
        self.vocabulary.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EngineConfig {
    /// Default configuration: built-in vocabulary and the standard uplift
    fn default() -> Self {
        Self {
            bias_factor: BIAS_FACTOR,
            vocabulary: Vocabulary::default(),
        }
    }
}
