//! Strict RLP decoder.
//!
//! Rejects every non-canonical form so that `encode(decode(b)) == b` for all
//! accepted inputs `b`.

use crate::errors::{Malformation, RlpError};
use crate::item::RlpItem;
use shared_types::U256;

/// Maximum list nesting accepted by [`decode`].
pub const MAX_NESTING: usize = 64;

/// Decode exactly one item occupying the whole input.
pub fn decode(input: &[u8]) -> Result<RlpItem, RlpError> {
    let (item, consumed) = decode_item(input, 0)?;
    if consumed != input.len() {
        return Err(Malformation::TrailingBytes(input.len() - consumed).into());
    }
    Ok(item)
}

/// Decode a canonical unsigned integer (at most 32 bytes, no leading zero).
pub fn decode_uint(item: &RlpItem) -> Result<U256, RlpError> {
    let bytes = integer_bytes(item, 32)?;
    Ok(U256::from_big_endian(bytes))
}

/// Decode a canonical `u64`.
pub fn decode_u64(item: &RlpItem) -> Result<u64, RlpError> {
    let bytes = integer_bytes(item, 8)?;
    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

fn integer_bytes(item: &RlpItem, max_len: usize) -> Result<&[u8], RlpError> {
    let bytes = item.as_bytes()?;
    if bytes.len() > max_len {
        return Err(Malformation::IntegerOverflow(bytes.len()).into());
    }
    if bytes.first() == Some(&0) {
        return Err(Malformation::NonCanonicalInteger.into());
    }
    Ok(bytes)
}

/// Decode one item from the front of `input`, returning it and the number of
/// bytes consumed.
fn decode_item(input: &[u8], depth: usize) -> Result<(RlpItem, usize), RlpError> {
    let first = *input.first().ok_or(Malformation::Empty)?;

    match first {
        0x00..=0x7f => Ok((RlpItem::Bytes(vec![first]), 1)),
        0x80..=0xb7 => {
            let len = (first - 0x80) as usize;
            let payload = take(input, 1, len)?;
            if len == 1 && payload[0] < 0x80 {
                return Err(Malformation::NonCanonicalSingleByte.into());
            }
            Ok((RlpItem::Bytes(payload.to_vec()), 1 + len))
        }
        0xb8..=0xbf => {
            let len_of_len = (first - 0xb7) as usize;
            let len = read_long_length(input, len_of_len)?;
            let offset = 1 + len_of_len;
            let payload = take(input, offset, len)?;
            Ok((RlpItem::Bytes(payload.to_vec()), offset + len))
        }
        0xc0..=0xf7 => {
            let len = (first - 0xc0) as usize;
            let payload = take(input, 1, len)?;
            Ok((RlpItem::List(decode_list_payload(payload, depth)?), 1 + len))
        }
        0xf8..=0xff => {
            let len_of_len = (first - 0xf7) as usize;
            let len = read_long_length(input, len_of_len)?;
            let offset = 1 + len_of_len;
            let payload = take(input, offset, len)?;
            Ok((
                RlpItem::List(decode_list_payload(payload, depth)?),
                offset + len,
            ))
        }
    }
}

/// Items must partition the payload exactly.
fn decode_list_payload(mut payload: &[u8], depth: usize) -> Result<Vec<RlpItem>, RlpError> {
    if depth >= MAX_NESTING {
        return Err(Malformation::TooDeep(MAX_NESTING).into());
    }
    let mut items = Vec::new();
    while !payload.is_empty() {
        let (item, consumed) = decode_item(payload, depth + 1)?;
        items.push(item);
        payload = &payload[consumed..];
    }
    Ok(items)
}

fn read_long_length(input: &[u8], len_of_len: usize) -> Result<usize, RlpError> {
    let len_bytes = take(input, 1, len_of_len)?;
    if len_bytes[0] == 0 {
        return Err(Malformation::NonCanonicalLength.into());
    }
    if len_of_len > std::mem::size_of::<usize>() {
        return Err(Malformation::LengthOverflow.into());
    }
    let len = len_bytes
        .iter()
        .fold(0usize, |acc, b| (acc << 8) | usize::from(*b));
    if len < 56 {
        return Err(Malformation::NonCanonicalLength.into());
    }
    Ok(len)
}

fn take(input: &[u8], offset: usize, len: usize) -> Result<&[u8], RlpError> {
    let available = input.len().saturating_sub(offset);
    let end = offset
        .checked_add(len)
        .ok_or(Malformation::LengthOverflow)?;
    if end > input.len() {
        return Err(Malformation::Truncated {
            declared: len,
            available,
        }
        .into());
    }
    Ok(&input[offset..end])
}
