//! Configuration for Literal Stats
//!
//! Settings come from the command line and the environment, with
//! precedence CLI > env > defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measure::Action;

/// Environment variable selecting the output format
pub const FORMAT_ENV: &str = "LITERAL_STATS_FORMAT";

/// CLI arguments for Literal Stats
#[derive(Parser, Debug, Clone)]
#[command(name = "literal-stats")]
#[command(version)]
#[command(
    about = "Sum character counts over a file of quoted string literals",
    long_about = None
)]
pub struct CliArgs {
    /// Measure to apply (raw, decoded, decodedDiff, encoded, encodedDiff)
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// File with one literal per line, or - for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// How the result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Total chars: N`
    #[default]
    Text,
    /// The tally as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub action: Action,
    pub input: PathBuf,
    pub format: OutputFormat,
}

impl Config {
    /// Resolve CLI arguments against the process environment
    pub fn load_with_args(args: &CliArgs) -> Result<Self> {
        Self::resolve(args, env::var(FORMAT_ENV).ok().as_deref())
    }

    /// Resolve CLI arguments against an explicit env format value
    pub fn resolve(args: &CliArgs, env_format: Option<&str>) -> Result<Self> {
        // Fail on the action before any input is touched
        let action = args.action.parse::<Action>()?;

        let format = match args.format.as_deref().or(env_format) {
            Some(name) => name.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            action,
            input: args.file.clone(),
            format,
        })
    }
}
