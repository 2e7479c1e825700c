//! Literal Stats Library
//!
//! Character-count statistics for files of quoted, escaped string literals.
//! This crate provides:
//!
//! - `literal`: decoding and encoding of quoted literals
//! - `measure`: the five per-line measures and the `Action` that selects one
//! - `tally`: summing a measure over every line of an input
//! - `config`: command-line and environment configuration

pub mod config;
pub mod error;
pub mod literal;
pub mod measure;
pub mod tally;

pub use error::{Error, LiteralError, LiteralResult, Result};
pub use measure::Action;
pub use tally::Tally;
