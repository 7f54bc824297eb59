//! circa - estimate the sales volume a listing snippet claims.

use circa_cli::{config, Cli, CliError, CliFormat, Formatter};
use circa_engine::Extractor;
use clap::Parser;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> circa_cli::Result<()> {
    let cli = Cli::parse();

    let engine_config = config::load(cli.config.as_deref())?;
    let extractor = Extractor::new(engine_config)?;

    let text = match cli.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let result = extractor.extract(&text);

    let format = cli.format.unwrap_or(CliFormat::Table);
    let color_enabled = !cli.no_color;
    let formatter = Formatter::new(format, color_enabled);
    println!("{}", formatter.format_result(&result)?);

    Ok(())
}

/// Read the snippet from stdin when no positional argument was given.
fn read_stdin() -> circa_cli::Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "no text given on the command line or stdin".to_string(),
        ));
    }
    Ok(buffer)
}
