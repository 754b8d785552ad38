//! Error types for formtext core operations.

use thiserror::Error;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3, 4, 6, or 8)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// Input was neither a known color name nor a hex value.
    #[error("unknown color: {0}")]
    UnknownColor(String),
}

/// Result type alias for color parsing.
pub type ColorResult<T> = std::result::Result<T, ColorParseError>;
