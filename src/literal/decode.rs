//! Literal Decoder
//!
//! Resolves the escapes inside a quoted literal with a small state machine
//! fed one character at a time.
//!
//! States:
//! - Ground: plain characters are copied through
//! - Escape: after a backslash, waiting for the escape kind
//! - Hex: after `\x`, collecting two hex digits

use crate::error::{LiteralError, LiteralResult};

use super::{ESCAPE, QUOTE};

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    /// High nibble, once the first digit has been seen
    Hex(Option<u8>),
}

/// Why a character was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reject {
    Hex,
    Escape(char),
}

/// Decoder for the body of a single literal
#[derive(Debug)]
pub struct Decoder {
    state: State,
    output: String,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a decoder in the ground state
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            output: String::new(),
        }
    }

    /// Decode a full quoted line, surrounding quotes included
    pub fn decode(mut self, line: &str) -> LiteralResult<String> {
        let body = strip_quotes(line).ok_or_else(|| LiteralError::BadQuotes {
            line: line.to_string(),
        })?;
        self.output.reserve(body.len());

        for c in body.chars() {
            self.process_char(c).map_err(|reject| match reject {
                Reject::Hex => LiteralError::BadHexEscape {
                    line: line.to_string(),
                },
                Reject::Escape(escape) => LiteralError::BadEscape {
                    escape,
                    line: line.to_string(),
                },
            })?;
        }

        match self.state {
            State::Ground => Ok(self.output),
            State::Escape => Err(LiteralError::ShortEscape {
                line: line.to_string(),
            }),
            State::Hex(_) => Err(LiteralError::BadHexEscape {
                line: line.to_string(),
            }),
        }
    }

    /// Process a single body character
    fn process_char(&mut self, c: char) -> Result<(), Reject> {
        match self.state {
            State::Ground => {
                if c == ESCAPE {
                    self.state = State::Escape;
                } else {
                    self.output.push(c);
                }
            },
            State::Escape => match c {
                ESCAPE | QUOTE => {
                    self.output.push(c);
                    self.state = State::Ground;
                },
                'x' => self.state = State::Hex(None),
                other => return Err(Reject::Escape(other)),
            },
            State::Hex(high) => {
                let nibble = c.to_digit(16).ok_or(Reject::Hex)? as u8;
                match high {
                    None => self.state = State::Hex(Some(nibble)),
                    Some(high) => {
                        self.output.push(char::from(high << 4 | nibble));
                        self.state = State::Ground;
                    },
                }
            },
        }
        Ok(())
    }
}

/// Body of a line between its first and last character, if both are quotes
fn strip_quotes(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(QUOTE)?;
    // A lone quote is both the opening and the closing one
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_suffix(QUOTE)
}

/// Decode a quoted literal into its content
pub fn decode(line: &str) -> LiteralResult<String> {
    Decoder::new().decode(line)
}
