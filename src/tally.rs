//! Summing a measure over every line of an input

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measure::Action;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Total of one action over one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Measure that was applied
    pub action: Action,
    /// Number of lines measured
    pub lines: usize,
    /// Sum of the measure over all lines
    pub total: usize,
}

impl Tally {
    /// Measure every line of `text`, stopping at the first failure
    pub fn from_text(action: Action, text: &str) -> Result<Self> {
        Self::from_lines(action, text.lines())
    }

    /// Measure each line after trimming surrounding whitespace
    pub fn from_lines<'a, I>(action: Action, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally = Tally {
            action,
            lines: 0,
            total: 0,
        };

        for (index, line) in lines.into_iter().enumerate() {
            let number = index + 1;
            let line = line.trim();
            let value = action
                .measure(line)
                .map_err(|source| Error::Line { number, source })?;
            tracing::debug!(number, value, "measured {}", action);
            tally.lines += 1;
            tally.total += value;
        }

        tracing::info!(lines = tally.lines, total = tally.total, "{} tally", action);
        Ok(tally)
    }

    /// Read a whole file (or stdin for `-`) and measure its lines
    pub fn from_path(action: Action, path: &Path) -> Result<Self> {
        let text = read_input(path)?;
        Self::from_text(action, &text)
    }
}

/// Read an input fully before any line is processed
pub fn read_input(path: &Path) -> Result<String> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
        return Ok(text);
    }

    tracing::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(io_error)
}
