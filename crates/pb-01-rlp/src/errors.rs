//! RLP error types.

use thiserror::Error;

/// Codec failure. Every rejection is a malformed-encoding condition; the
/// [`Malformation`] says which rule was violated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RlpError {
    /// Input is not a canonical RLP encoding of the expected shape.
    #[error("Malformed RLP encoding: {0}")]
    MalformedEncoding(Malformation),
}

/// The specific encoding rule that was violated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Malformation {
    /// No input where an item was expected.
    #[error("empty input")]
    Empty,

    /// A length prefix claims more bytes than remain.
    #[error("declared length {declared} exceeds remaining {available} bytes")]
    Truncated {
        /// Bytes the prefix claims.
        declared: usize,
        /// Bytes actually left.
        available: usize,
    },

    /// `0x81 b` with `b < 0x80`; the byte must encode itself.
    #[error("single byte below 0x80 wrapped in a string prefix")]
    NonCanonicalSingleByte,

    /// Long-form length with leading zeros or a value below 56.
    #[error("non-canonical long-form length")]
    NonCanonicalLength,

    /// Length does not fit in `usize`.
    #[error("length overflow")]
    LengthOverflow,

    /// Bytes remain after the top-level item.
    #[error("{0} trailing bytes after item")]
    TrailingBytes(usize),

    /// Nesting exceeds the decoder's depth limit.
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    /// A list was found where a byte string was expected.
    #[error("expected byte string, found list")]
    ExpectedBytes,

    /// A byte string was found where a list was expected.
    #[error("expected list, found byte string")]
    ExpectedList,

    /// Integer with a leading zero byte.
    #[error("integer has leading zero byte")]
    NonCanonicalInteger,

    /// Integer wider than the target type.
    #[error("integer of {0} bytes overflows target")]
    IntegerOverflow(usize),
}

impl From<Malformation> for RlpError {
    fn from(m: Malformation) -> Self {
        RlpError::MalformedEncoding(m)
    }
}
