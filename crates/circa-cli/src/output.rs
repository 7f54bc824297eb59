//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use circa_engine::ExtractionResult;
use colored::*;

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extraction result.
    pub fn format_result(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            CliFormat::Table => Ok(self.format_table(result)),
            CliFormat::Quiet => Ok(result.estimate.to_string()),
        }
    }

    /// Format a result as a human-readable line.
    fn format_table(&self, result: &ExtractionResult) -> String {
        if result.found {
            self.colorize(
                &format!("✓ estimated sales volume: {}", result.estimate),
                "green",
            )
        } else {
            self.colorize("✗ no sales claim found", "yellow")
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
