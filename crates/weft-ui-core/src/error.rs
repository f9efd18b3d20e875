//! Error types for parsing presentation values.

use thiserror::Error;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Input did not start with `#`.
    #[error("missing '#' prefix")]
    MissingPrefix,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3, 4, 6, or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,
}

/// Error type for length parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LengthParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// The numeric part of a recognized unit was not a finite number.
    #[error("invalid numeric value: {0}")]
    InvalidNumber(String),
}
