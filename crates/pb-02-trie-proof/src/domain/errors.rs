//! Proof error types.

use pb_01_rlp::RlpError;
use shared_types::Hash;
use thiserror::Error;

/// Errors raised while decoding trie nodes or verifying a proof.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProofError {
    /// A proof entry or node field is not canonical RLP.
    #[error(transparent)]
    Malformed(#[from] RlpError),

    /// A decoded item is not a leaf, extension or branch node.
    #[error("Invalid node shape: {0}")]
    InvalidNodeShape(ShapeViolation),

    /// A proof entry does not hash to the reference that points at it.
    #[error("Hash mismatch at proof entry {index}: expected {}, got {}", hex(.expected), hex(.actual))]
    HashMismatch {
        /// Position of the offending entry in the proof.
        index: usize,
        /// Hash the parent node (or the root) committed to.
        expected: Hash,
        /// Hash of the supplied entry.
        actual: Hash,
    },

    /// The proof is structurally inconsistent with the key.
    #[error("Proof invalid: {0}")]
    ProofInvalid(InvalidProof),

    /// The proof shows the key is absent from the trie.
    #[error("Key not found")]
    KeyNotFound,

    /// More entries than a key of this length could ever need.
    #[error("Proof too deep: {depth} entries, max {max}")]
    ProofTooDeep {
        /// Entries supplied.
        depth: usize,
        /// Upper bound for the key.
        max: usize,
    },

    /// The proved account value is not `[nonce, balance, storageRoot, codeHash]`.
    #[error("Invalid account record: {0}")]
    InvalidAccountRecord(&'static str),
}

/// Ways a decoded item fails to be a trie node.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ShapeViolation {
    /// Node is a byte string or a list of the wrong arity.
    #[error("expected 2 or 17 elements, got {0}")]
    Arity(usize),
    /// Hex-prefix path field is a list.
    #[error("path is not a byte string")]
    PathNotBytes,
    /// Hex-prefix path field is empty.
    #[error("empty path encoding")]
    EmptyPath,
    /// Flag nibble above 3.
    #[error("invalid hex-prefix flag {0}")]
    InvalidFlag(u8),
    /// Even-length path with a non-zero padding nibble.
    #[error("non-zero padding nibble")]
    NonZeroPadding,
    /// Extension with no path nibbles.
    #[error("extension with empty path")]
    EmptyExtension,
    /// Value slot holds a list.
    #[error("value is not a byte string")]
    ValueNotBytes,
    /// Child reference is neither empty, a 32-byte hash nor an inline node.
    #[error("invalid child reference of {0} bytes")]
    InvalidChildReference(usize),
    /// Extension child is empty.
    #[error("extension child is empty")]
    EmptyExtensionChild,
    /// Inline child whose encoding is 32 bytes or longer.
    #[error("inline child of {0} bytes must be hashed")]
    OversizedInlineChild(usize),
}

/// Structural proof failures that are neither hash nor shape errors.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidProof {
    /// The walk needs another entry but the proof has none.
    #[error("proof exhausted before reaching the key")]
    Exhausted,
    /// Entries remain after the walk terminated.
    #[error("{0} unused proof entries")]
    TrailingEntries(usize),
    /// A terminal node carries an empty value.
    #[error("terminal value is empty")]
    EmptyValue,
}

impl From<ShapeViolation> for ProofError {
    fn from(v: ShapeViolation) -> Self {
        ProofError::InvalidNodeShape(v)
    }
}

impl From<InvalidProof> for ProofError {
    fn from(v: InvalidProof) -> Self {
        ProofError::ProofInvalid(v)
    }
}

fn hex(hash: &Hash) -> String {
    shared_types::to_hex_prefixed(hash)
}
