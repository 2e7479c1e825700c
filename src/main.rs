//! Literal Stats
//!
//! Sums a character-count measure over a file of quoted string literals.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use literal_stats::config::{CliArgs, Config, OutputFormat};
use literal_stats::{Result, Tally};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let config = Config::load_with_args(args)?;
    tracing::debug!(?config, "resolved configuration");

    let tally = Tally::from_path(config.action, &config.input)?;

    match config.format {
        OutputFormat::Text => println!("Total chars: {}", tally.total),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tally)?),
    }

    Ok(())
}
