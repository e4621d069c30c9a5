//! # Proof Blob Codec
//!
//! A proof travels as one RLP list of byte strings, one per node, in
//! root-to-leaf order.

use pb_01_rlp::{decode, encode_bytes, encode_list, Malformation, RlpError, RlpItem};

/// Serialise proof nodes into a single blob.
pub fn encode_proof(nodes: &[Vec<u8>]) -> Vec<u8> {
    let items: Vec<Vec<u8>> = nodes.iter().map(|n| encode_bytes(n)).collect();
    encode_list(&items)
}

/// Split a blob back into its proof nodes, preserving order.
pub fn decode_proof(blob: &[u8]) -> Result<Vec<Vec<u8>>, RlpError> {
    match decode(blob)? {
        RlpItem::List(items) => items.into_iter().map(RlpItem::into_bytes).collect(),
        RlpItem::Bytes(_) => Err(RlpError::MalformedEncoding(Malformation::ExpectedList)),
    }
}
