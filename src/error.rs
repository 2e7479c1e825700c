//! Error types for literal measurement and runs over an input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while measuring a single line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Bad line quotes: {line}")]
    BadQuotes { line: String },

    #[error("Bad line short escape: {line}")]
    ShortEscape { line: String },

    #[error("Bad line hex escape: {line}")]
    BadHexEscape { line: String },

    #[error("Bad line escape '\\{escape}': {line}")]
    BadEscape { escape: char, line: String },

    #[error("Unexpected diff ({diff}) for line: {line}")]
    UnexpectedDiff { diff: isize, line: String },
}

/// Result type for per-line operations
pub type LiteralResult<T> = std::result::Result<T, LiteralError>;

/// Failure of a whole run
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {number}: {source}")]
    Line {
        number: usize,
        #[source]
        source: LiteralError,
    },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for runs
pub type Result<T> = std::result::Result<T, Error>;
