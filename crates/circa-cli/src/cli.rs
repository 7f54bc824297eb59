//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// circa - Estimate the sales volume a listing snippet claims.
#[derive(Debug, Parser)]
#[command(name = "circa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Listing snippet to analyze; read from stdin when omitted
    pub text: Option<String>,

    /// Output format (defaults to table)
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Engine configuration file (TOML)
    #[arg(short, long, env = "CIRCA_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable result (default)
    Table,
    /// JSON object
    Json,
    /// Bare estimate only
    Quiet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_text() {
        let cli = Cli::try_parse_from(["circa", "2 mil vendidos"]).unwrap();
        assert_eq!(cli.text.as_deref(), Some("2 mil vendidos"));
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_parses_format_flag() {
        let cli = Cli::try_parse_from(["circa", "--format", "json", "x"]).unwrap();
        assert_eq!(cli.format, Some(CliFormat::Json));
    }

    #[test]
    fn test_text_is_optional() {
        let cli = Cli::try_parse_from(["circa"]).unwrap();
        assert!(cli.text.is_none());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["circa", "--format", "xml"]).is_err());
    }
}
