//! # Iterative Proof Verification
//!
//! Walks an inclusion proof from a trusted root to a key without recursion.
//!
//! ## Algorithm: Nibble-Walking Loop
//!
//! 1. Reject proofs longer than the key could need (`ProofTooDeep`)
//! 2. Follow references from the root: hash references consume the next
//!    proof entry and must match its Keccak256, inline references are decoded
//!    in place
//! 3. Leaf: the path must equal the remaining key. Extension: the fragment
//!    must prefix it. Branch: consume one nibble
//! 4. After termination every entry must have been used
//!
//! A walk that ends on an empty branch slot, or on a leaf or extension whose
//! path diverges from the key, proves absence (`KeyNotFound`).

use super::errors::{InvalidProof, ProofError};
use super::nibbles::Nibbles;
use super::node::{NodeRef, TrieNode};
use pb_01_rlp::decode;
use shared_crypto::keccak256;
use shared_types::Hash;

/// Keccak256 of the RLP empty string: the root of an empty trie.
pub const EMPTY_TRIE_ROOT: Hash = [
    0x56, 0xe8, 0x1f, 0x17, 0x1b, 0xcc, 0x55, 0xa6, 0xff, 0x83, 0x45, 0xe6, 0x92, 0xc0, 0xf8, 0x6e,
    0x5b, 0x48, 0xe0, 0x1b, 0x99, 0x6c, 0xad, 0xc0, 0x01, 0x62, 0x2f, 0xb5, 0xe3, 0x63, 0xb4, 0x21,
];

/// Verify that `proof` proves the value of `key` under `root`.
///
/// `key` is the trie key as stored (already hashed for secure tries).
/// Returns the raw stored value.
pub fn verify_proof(root: &Hash, key: &[u8], proof: &[Vec<u8>]) -> Result<Vec<u8>, ProofError> {
    let key = Nibbles::from_bytes(key);

    // Every step consumes at least one nibble except the terminal one.
    let max = key.len() + 1;
    if proof.len() > max {
        return Err(ProofError::ProofTooDeep {
            depth: proof.len(),
            max,
        });
    }

    if proof.is_empty() && *root == EMPTY_TRIE_ROOT {
        return Err(ProofError::KeyNotFound);
    }

    let mut next = NodeRef::Hash(*root);
    let mut consumed = 0usize;
    let mut key_index = 0usize;

    let found = loop {
        let item = match std::mem::take(&mut next) {
            NodeRef::Empty => break None,
            NodeRef::Hash(expected) => {
                let entry = proof.get(consumed).ok_or(InvalidProof::Exhausted)?;
                let actual = keccak256(entry);
                if actual != expected {
                    return Err(ProofError::HashMismatch {
                        index: consumed,
                        expected,
                        actual,
                    });
                }
                consumed += 1;
                decode(entry)?
            }
            NodeRef::Inline(item) => item,
        };

        // `0x80` is the empty root node.
        if item.is_empty_bytes() {
            break None;
        }

        let remaining = &key.as_slice()[key_index..];
        match TrieNode::decode(&item)? {
            TrieNode::Leaf { path, value } => {
                break (path.as_slice() == remaining).then_some(value);
            }
            TrieNode::Extension { path, child } => {
                if !remaining.starts_with(path.as_slice()) {
                    break None;
                }
                key_index += path.len();
                next = child;
            }
            TrieNode::Branch {
                mut children,
                value,
            } => match remaining.first() {
                None => break (!value.is_empty()).then_some(value),
                Some(&nibble) => {
                    key_index += 1;
                    next = std::mem::take(&mut children[usize::from(nibble)]);
                }
            },
        }
    };

    if consumed != proof.len() {
        return Err(InvalidProof::TrailingEntries(proof.len() - consumed).into());
    }

    match found {
        Some(value) if value.is_empty() => Err(InvalidProof::EmptyValue.into()),
        Some(value) => Ok(value),
        None => Err(ProofError::KeyNotFound),
    }
}
