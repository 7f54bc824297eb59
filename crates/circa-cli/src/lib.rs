//! circa CLI library.
//!
//! Provides argument parsing, configuration loading, and output
//! formatting for the `circa` command-line interface.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
