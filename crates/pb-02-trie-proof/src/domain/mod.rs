//! Domain layer: pure trie and proof logic.

/// Account records proved against a state root.
pub mod account;
/// Proof, shape and structure errors.
pub mod errors;
/// Trie keys for accounts and mapping slots.
pub mod keys;
/// Nibble paths and hex-prefix encoding.
pub mod nibbles;
/// Leaf, extension and branch nodes.
pub mod node;
/// Single-blob serialisation of a node list.
pub mod proof_blob;
/// Proof walk from a trusted root.
pub mod verify;

pub use account::*;
pub use errors::*;
pub use keys::*;
pub use nibbles::*;
pub use node::*;
pub use proof_blob::*;
pub use verify::*;
