//! # Error Types
//!
//! Errors for parsing textual encodings at the system edges.

use thiserror::Error;

/// Errors produced while parsing hex strings into fixed-size values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HexError {
    /// The input contains a non-hex character or has odd length.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded byte length does not match the target type.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
