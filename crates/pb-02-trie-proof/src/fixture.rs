//! # Fixture Trie Builder
//!
//! Deterministic Merkle-Patricia trie for generating real proofs in tests.
//! Rebuilds the whole trie from a sorted key set on every call, so it is only
//! suitable for small fixtures.

use crate::domain::{
    account_key, storage_trie_key, AccountState, Nibbles, NodeRef, TrieNode,
    MAX_INLINE_NODE_LENGTH, EMPTY_TRIE_ROOT,
};
use pb_01_rlp::{decode, encode_uint};
use shared_crypto::keccak256;
use shared_types::{Address, Hash, U256};
use std::collections::BTreeMap;

type Entry<'a> = (Vec<u8>, &'a [u8]);

/// In-memory trie fixture.
#[derive(Clone, Debug, Default)]
pub struct FixtureTrie {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl FixtureTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw key/value. An empty value removes the key.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: Vec<u8>) {
        let key = key.into();
        if value.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }

    /// Insert an account under `keccak256(address)`.
    pub fn insert_account(&mut self, address: &Address, account: &AccountState) {
        self.insert(account_key(address).to_vec(), account.rlp_encode());
    }

    /// Store a word under `keccak256(slot)`. Zero clears the slot.
    pub fn insert_storage(&mut self, slot: &Hash, value: U256) {
        let encoded = if value.is_zero() {
            Vec::new()
        } else {
            encode_uint(value)
        };
        self.insert(storage_trie_key(slot).to_vec(), encoded);
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trie has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Root hash.
    pub fn root(&self) -> Hash {
        if self.entries.is_empty() {
            return EMPTY_TRIE_ROOT;
        }
        keccak256(&build_node(&self.nibble_entries(), 0).rlp_encode())
    }

    /// Proof for `key`: the root plus every hashed node on the path.
    /// Inline nodes travel inside their parents. Works for absent keys too.
    pub fn proof(&self, key: &[u8]) -> Vec<Vec<u8>> {
        let mut proof = Vec::new();
        if self.entries.is_empty() {
            return proof;
        }

        let target = Nibbles::from_bytes(key).0;
        let mut entries = self.nibble_entries();
        let mut depth = 0;

        loop {
            let node = build_node(&entries, depth);
            let encoded = node.rlp_encode();
            if proof.is_empty() || encoded.len() >= MAX_INLINE_NODE_LENGTH {
                proof.push(encoded);
            }

            match node {
                TrieNode::Leaf { .. } => break,
                TrieNode::Extension { path, .. } => {
                    if !target[depth..].starts_with(path.as_slice()) {
                        break;
                    }
                    depth += path.len();
                }
                TrieNode::Branch { .. } => {
                    let Some(&nibble) = target.get(depth) else {
                        break;
                    };
                    entries.retain(|(k, _)| k.get(depth) == Some(&nibble));
                    if entries.is_empty() {
                        break;
                    }
                    depth += 1;
                }
            }
        }
        proof
    }

    /// Proof for the account at `address`.
    pub fn account_proof(&self, address: &Address) -> Vec<Vec<u8>> {
        self.proof(&account_key(address))
    }

    /// Proof for storage `slot`.
    pub fn storage_proof(&self, slot: &Hash) -> Vec<Vec<u8>> {
        self.proof(&storage_trie_key(slot))
    }

    fn nibble_entries(&self) -> Vec<Entry<'_>> {
        self.entries
            .iter()
            .map(|(k, v)| (Nibbles::from_bytes(k).0, v.as_slice()))
            .collect()
    }
}

/// Build the node covering `entries`, all of which share `key[..depth]`.
fn build_node(entries: &[Entry<'_>], depth: usize) -> TrieNode {
    if let [(key, value)] = entries {
        return TrieNode::Leaf {
            path: Nibbles(key[depth..].to_vec()),
            value: value.to_vec(),
        };
    }

    let first = &entries[0].0[depth..];
    let shared = entries[1..]
        .iter()
        .map(|(k, _)| Nibbles(first.to_vec()).common_prefix_len(&k[depth..]))
        .min()
        .unwrap_or(0);

    if shared > 0 {
        return TrieNode::Extension {
            path: Nibbles(first[..shared].to_vec()),
            child: child_ref(build_node(entries, depth + shared)),
        };
    }

    let mut children: [NodeRef; 16] = Default::default();
    let mut value = Vec::new();
    for (nibble, slot) in children.iter_mut().enumerate() {
        let group: Vec<Entry<'_>> = entries
            .iter()
            .filter(|(k, _)| k.get(depth) == Some(&(nibble as u8)))
            .cloned()
            .collect();
        if !group.is_empty() {
            *slot = child_ref(build_node(&group, depth + 1));
        }
    }
    if let Some((_, v)) = entries.iter().find(|(k, _)| k.len() == depth) {
        value = v.to_vec();
    }

    TrieNode::Branch {
        children: Box::new(children),
        value,
    }
}

fn child_ref(node: TrieNode) -> NodeRef {
    let encoded = node.rlp_encode();
    if encoded.len() < MAX_INLINE_NODE_LENGTH {
        NodeRef::Inline(decode(&encoded).expect("fixture nodes are canonical"))
    } else {
        NodeRef::Hash(keccak256(&encoded))
    }
}
