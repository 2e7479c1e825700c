//! Per-line measures
//!
//! Each measure maps one line to a character count. `Action` names a
//! measure so a driver can select one at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, LiteralError, LiteralResult};
use crate::literal;

/// Smallest valid difference between raw and decoded, or encoded and raw,
/// lengths: the two quote characters
pub const MIN_DIFF: isize = 2;

/// Number of characters in the line as given
pub fn raw_length(line: &str) -> usize {
    line.chars().count()
}

/// Number of characters in the decoded content of a quoted literal
pub fn decoded_length(line: &str) -> LiteralResult<usize> {
    Ok(literal::decode(line)?.chars().count())
}

/// Characters saved by decoding the line
pub fn decoded_diff(line: &str) -> LiteralResult<usize> {
    checked_diff(raw_length(line), decoded_length(line)?, line)
}

/// Number of characters after encoding the line as a new literal
pub fn encoded_length(line: &str) -> usize {
    literal::encoded_len(line)
}

/// Characters added by encoding the line
pub fn encoded_diff(line: &str) -> LiteralResult<usize> {
    checked_diff(encoded_length(line), raw_length(line), line)
}

fn checked_diff(longer: usize, shorter: usize, line: &str) -> LiteralResult<usize> {
    let diff = longer as isize - shorter as isize;
    if diff < MIN_DIFF {
        return Err(LiteralError::UnexpectedDiff {
            diff,
            line: line.to_string(),
        });
    }
    Ok(diff as usize)
}

/// A named per-line measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Length as given
    Raw,
    /// Length after decoding
    Decoded,
    /// Raw minus decoded
    DecodedDiff,
    /// Length after encoding
    Encoded,
    /// Encoded minus raw
    EncodedDiff,
}

impl Action {
    /// Every action, in the order they are listed to users
    pub const ALL: [Action; 5] = [
        Action::Raw,
        Action::Decoded,
        Action::DecodedDiff,
        Action::Encoded,
        Action::EncodedDiff,
    ];

    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Action::Raw => "raw",
            Action::Decoded => "decoded",
            Action::DecodedDiff => "decodedDiff",
            Action::Encoded => "encoded",
            Action::EncodedDiff => "encodedDiff",
        }
    }

    /// Apply this measure to a line
    pub fn measure(self, line: &str) -> LiteralResult<usize> {
        match self {
            Action::Raw => Ok(raw_length(line)),
            Action::Decoded => decoded_length(line),
            Action::DecodedDiff => decoded_diff(line),
            Action::Encoded => Ok(encoded_length(line)),
            Action::EncodedDiff => encoded_diff(line),
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_length() {
        assert_eq!(raw_length(""), 0);
        assert_eq!(raw_length(r#""aaa\"aaa""#), 10);
        assert_eq!(raw_length("世界"), 2);
    }

    #[test]
    fn test_decoded_examples() {
        let cases = [
            (r#""""#, 2, 0, 2),
            (r#""abc""#, 5, 3, 2),
            (r#""aaa\"aaa""#, 10, 7, 3),
            (r#""\x27""#, 6, 1, 5),
        ];
        for (line, raw, decoded, diff) in cases {
            assert_eq!(raw_length(line), raw, "raw {line}");
            assert_eq!(decoded_length(line).unwrap(), decoded, "decoded {line}");
            assert_eq!(decoded_diff(line).unwrap(), diff, "diff {line}");
        }
    }

    #[test]
    fn test_encoded_examples() {
        assert_eq!(encoded_length(r#""""#), 6);
        assert_eq!(encoded_diff(r#""""#).unwrap(), 4);
        assert_eq!(encoded_length(r#""abc""#), 9);
        assert_eq!(encoded_length(r#""aaa\"aaa""#), 16);
        assert_eq!(encoded_length(r#""\x27""#), 11);
        assert_eq!(encoded_diff(r#""\x27""#).unwrap(), 5);
    }

    #[test]
    fn test_encoded_length_of_plain_content() {
        assert_eq!(encoded_length("abc"), 5);
        assert_eq!(encoded_diff("abc").unwrap(), 2);
        assert_eq!(encoded_diff("").unwrap(), 2);
    }

    #[test]
    fn test_decoded_diff_lone_quote() {
        assert_eq!(
            decoded_diff("\""),
            Err(LiteralError::UnexpectedDiff {
                diff: 1,
                line: "\"".to_string()
            })
        );
    }

    #[test]
    fn test_decoded_diff_propagates_decode_error() {
        assert!(matches!(
            decoded_diff(r#""abc"#),
            Err(LiteralError::BadQuotes { .. })
        ));
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!("raw".parse::<Action>().unwrap(), Action::Raw);
        assert_eq!("decoded".parse::<Action>().unwrap(), Action::Decoded);
        assert_eq!("decodedDiff".parse::<Action>().unwrap(), Action::DecodedDiff);
        assert_eq!("encoded".parse::<Action>().unwrap(), Action::Encoded);
        assert_eq!("encodedDiff".parse::<Action>().unwrap(), Action::EncodedDiff);
    }

    #[test]
    fn test_action_from_str_unknown() {
        for name in ["", "Raw", "decodeddiff", "bogus"] {
            match name.parse::<Action>() {
                Err(Error::UnknownAction(got)) => assert_eq!(got, name),
                other => panic!("Expected UnknownAction for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_action_name_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
            assert_eq!(action.to_string(), action.name());
        }
    }

    #[test]
    fn test_action_measure_dispatch() {
        let line = r#""aaa\"aaa""#;
        assert_eq!(Action::Raw.measure(line).unwrap(), 10);
        assert_eq!(Action::Decoded.measure(line).unwrap(), 7);
        assert_eq!(Action::DecodedDiff.measure(line).unwrap(), 3);
        assert_eq!(Action::Encoded.measure(line).unwrap(), 16);
        assert_eq!(Action::EncodedDiff.measure(line).unwrap(), 6);
    }

    #[test]
    fn test_action_serializes_as_name() {
        for action in Action::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.name()));
        }
    }
}
