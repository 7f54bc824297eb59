//! Engine configuration loading for the CLI.

use crate::error::{CliError, Result};
use circa_engine::EngineConfig;
use std::path::Path;
use tracing::debug;

/// Load the engine configuration
///
/// Reads a TOML file when a path is given, otherwise falls back to the
/// built-in defaults.
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    debug!("Loading engine configuration from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    EngineConfig::from_toml(&contents)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}
