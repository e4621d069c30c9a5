//! RLP item model.

use crate::errors::{Malformation, RlpError};

/// A decoded RLP value: a byte string or a list of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RlpItem {
    /// Byte string (possibly empty).
    Bytes(Vec<u8>),
    /// List of nested items (possibly empty).
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Construct a byte string item.
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        RlpItem::Bytes(data.into())
    }

    /// Construct a list item.
    pub fn list(items: Vec<RlpItem>) -> Self {
        RlpItem::List(items)
    }

    /// The empty byte string (`0x80`).
    pub fn empty() -> Self {
        RlpItem::Bytes(Vec::new())
    }

    /// Whether this item is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, RlpItem::List(_))
    }

    /// Whether this item is the empty byte string.
    pub fn is_empty_bytes(&self) -> bool {
        matches!(self, RlpItem::Bytes(b) if b.is_empty())
    }

    /// Borrow the byte string payload.
    pub fn as_bytes(&self) -> Result<&[u8], RlpError> {
        match self {
            RlpItem::Bytes(b) => Ok(b),
            RlpItem::List(_) => Err(RlpError::MalformedEncoding(Malformation::ExpectedBytes)),
        }
    }

    /// Borrow the list elements.
    pub fn as_list(&self) -> Result<&[RlpItem], RlpError> {
        match self {
            RlpItem::List(items) => Ok(items),
            RlpItem::Bytes(_) => Err(RlpError::MalformedEncoding(Malformation::ExpectedList)),
        }
    }

    /// Consume into the byte string payload.
    pub fn into_bytes(self) -> Result<Vec<u8>, RlpError> {
        match self {
            RlpItem::Bytes(b) => Ok(b),
            RlpItem::List(_) => Err(RlpError::MalformedEncoding(Malformation::ExpectedBytes)),
        }
    }
}
