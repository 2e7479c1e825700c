//! Quoted literal decoding and encoding
//!
//! A literal is a line wrapped in double quotes whose body may contain the
//! escapes `\\`, `\"` and `\xHH`. Decoding resolves them; encoding produces
//! a new literal that decodes back to the given content.

mod decode;
mod encode;

pub use decode::{decode, Decoder};
pub use encode::{encode, encoded_len};

/// Quote character delimiting a literal
pub const QUOTE: char = '"';

/// Character introducing an escape sequence
pub const ESCAPE: char = '\\';
