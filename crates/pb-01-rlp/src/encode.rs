//! RLP encoder.

use crate::item::RlpItem;
use shared_types::U256;

/// Threshold between short and long form prefixes.
const SHORT_LIMIT: usize = 56;

/// Encode an item.
pub fn encode(item: &RlpItem) -> Vec<u8> {
    match item {
        RlpItem::Bytes(b) => encode_bytes(b),
        RlpItem::List(items) => {
            let encoded: Vec<Vec<u8>> = items.iter().map(encode).collect();
            encode_list(&encoded)
        }
    }
}

/// RLP-encode a byte slice.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] < 0x80 {
        return vec![data[0]];
    }
    let mut out = Vec::with_capacity(data.len() + 9);
    push_header(&mut out, 0x80, 0xb7, data.len());
    out.extend_from_slice(data);
    out
}

/// Wrap already-encoded items in a list prefix.
pub fn encode_list(encoded_items: &[Vec<u8>]) -> Vec<u8> {
    let payload_len: usize = encoded_items.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(payload_len + 9);
    push_header(&mut out, 0xc0, 0xf7, payload_len);
    for encoded in encoded_items {
        out.extend_from_slice(encoded);
    }
    out
}

/// Encode an unsigned integer as its minimal big-endian byte string.
/// Zero is the empty string.
pub fn encode_uint(value: U256) -> Vec<u8> {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    encode_bytes(strip_leading_zeros(&buf))
}

/// Encode a `u64` as its minimal big-endian byte string.
pub fn encode_u64(value: u64) -> Vec<u8> {
    encode_bytes(strip_leading_zeros(&value.to_be_bytes()))
}

fn push_header(out: &mut Vec<u8>, short_base: u8, long_base: u8, len: usize) {
    if len < SHORT_LIMIT {
        out.push(short_base + len as u8);
    } else {
        let len_bytes = len.to_be_bytes();
        let len_bytes = strip_leading_zeros(&len_bytes);
        out.push(long_base + len_bytes.len() as u8);
        out.extend_from_slice(len_bytes);
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
