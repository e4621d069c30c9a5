use super::errors::{ProofError, ShapeViolation};
use super::nibbles::Nibbles;
use pb_01_rlp::{encode, encode_bytes, encode_list, RlpItem};
use shared_types::Hash;

// =============================================================================
// TRIE NODE: Leaf, Extension and Branch as they appear in proofs
// =============================================================================

/// Branch nodes have 16 child slots and one value slot.
pub const BRANCH_NODE_LENGTH: usize = 17;

/// Leaf and extension nodes have a path and a value/child.
pub const LEAF_OR_EXTENSION_NODE_LENGTH: usize = 2;

/// Encodings shorter than this are embedded in their parent instead of hashed.
pub const MAX_INLINE_NODE_LENGTH: usize = 32;

/// Reference from a node to one of its children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeRef {
    /// Empty slot (`0x80`).
    #[default]
    Empty,
    /// Keccak256 of the child's encoding; the child is the next proof entry.
    Hash(Hash),
    /// Child embedded in place because its encoding is under 32 bytes.
    Inline(RlpItem),
}

impl NodeRef {
    fn decode(item: &RlpItem) -> Result<Self, ShapeViolation> {
        match item {
            RlpItem::Bytes(b) if b.is_empty() => Ok(NodeRef::Empty),
            RlpItem::Bytes(b) => {
                let hash: Hash = b
                    .as_slice()
                    .try_into()
                    .map_err(|_| ShapeViolation::InvalidChildReference(b.len()))?;
                Ok(NodeRef::Hash(hash))
            }
            RlpItem::List(_) => {
                let len = encode(item).len();
                if len >= MAX_INLINE_NODE_LENGTH {
                    return Err(ShapeViolation::OversizedInlineChild(len));
                }
                Ok(NodeRef::Inline(item.clone()))
            }
        }
    }

    /// Encoding of this reference as an element of its parent list.
    pub fn rlp_encode(&self) -> Vec<u8> {
        match self {
            NodeRef::Empty => vec![0x80],
            NodeRef::Hash(h) => encode_bytes(h),
            NodeRef::Inline(item) => encode(item),
        }
    }
}

/// Node types in the Merkle-Patricia trie.
///
/// Decoded per verification step and dropped once the walk moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrieNode {
    /// Leaf node: remaining key path and the stored value.
    /// RLP: `[hex_prefix(path, leaf=true), value]`
    Leaf {
        /// Remaining path from this position to the key's end.
        path: Nibbles,
        /// Stored value (itself RLP for account and storage tries).
        value: Vec<u8>,
    },

    /// Extension node: shared path fragment and a single child.
    /// RLP: `[hex_prefix(path, leaf=false), child]`
    Extension {
        /// Shared prefix path (never empty).
        path: Nibbles,
        /// Child reference (hash or inline node).
        child: NodeRef,
    },

    /// Branch node: 16-way fan-out plus an optional value.
    /// RLP: `[child[0], ..., child[15], value]`
    Branch {
        /// One slot per nibble value.
        children: Box<[NodeRef; 16]>,
        /// Value for a key terminating here (empty = none).
        value: Vec<u8>,
    },
}

impl TrieNode {
    /// Classify a decoded RLP item as a trie node.
    pub fn decode(item: &RlpItem) -> Result<Self, ProofError> {
        let elements = match item {
            RlpItem::List(elements) => elements,
            RlpItem::Bytes(_) => return Err(ShapeViolation::Arity(0).into()),
        };

        match elements.len() {
            LEAF_OR_EXTENSION_NODE_LENGTH => {
                let encoded_path = elements[0]
                    .as_bytes()
                    .map_err(|_| ShapeViolation::PathNotBytes)?;
                let (path, is_leaf) = Nibbles::decode_hex_prefix(encoded_path)?;

                if is_leaf {
                    let value = elements[1]
                        .as_bytes()
                        .map_err(|_| ShapeViolation::ValueNotBytes)?;
                    Ok(TrieNode::Leaf {
                        path,
                        value: value.to_vec(),
                    })
                } else {
                    if path.is_empty() {
                        return Err(ShapeViolation::EmptyExtension.into());
                    }
                    let child = NodeRef::decode(&elements[1])?;
                    if child == NodeRef::Empty {
                        return Err(ShapeViolation::EmptyExtensionChild.into());
                    }
                    Ok(TrieNode::Extension { path, child })
                }
            }
            BRANCH_NODE_LENGTH => {
                let mut children: [NodeRef; 16] = Default::default();
                for (slot, element) in children.iter_mut().zip(&elements[..16]) {
                    *slot = NodeRef::decode(element)?;
                }
                let value = elements[16]
                    .as_bytes()
                    .map_err(|_| ShapeViolation::ValueNotBytes)?;
                Ok(TrieNode::Branch {
                    children: Box::new(children),
                    value: value.to_vec(),
                })
            }
            other => Err(ShapeViolation::Arity(other).into()),
        }
    }

    /// RLP-encode this node.
    pub fn rlp_encode(&self) -> Vec<u8> {
        match self {
            TrieNode::Leaf { path, value } => encode_list(&[
                encode_bytes(&path.encode_hex_prefix(true)),
                encode_bytes(value),
            ]),
            TrieNode::Extension { path, child } => encode_list(&[
                encode_bytes(&path.encode_hex_prefix(false)),
                child.rlp_encode(),
            ]),
            TrieNode::Branch { children, value } => {
                let mut items: Vec<Vec<u8>> = children.iter().map(NodeRef::rlp_encode).collect();
                items.push(encode_bytes(value));
                encode_list(&items)
            }
        }
    }
}
