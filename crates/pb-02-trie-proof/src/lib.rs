//! # pb-02-trie-proof
//!
//! Merkle-Patricia trie proof verification for the bridge.
//!
//! ## Role in System
//!
//! - **Trie Node Decoder**: classifies decoded RLP lists as leaf, extension
//!   or branch nodes and validates their hex-prefix paths
//! - **MPT Proof Verifier**: walks an ordered list of proof nodes from a
//!   trusted root hash to a key, hash-checking every referenced node
//! - **Account / Storage helpers**: account-record decoding and the storage
//!   slot derivation for `mapping(uint256 => ...)`
//!
//! ## Verification Flow
//!
//! ```text
//! state root ──verify_account(keccak(contract))──→ AccountState.storage_root
//!                                                          │
//! storage root ──verify_storage_value(keccak(slot))──→ slot value (U256)
//! ```
//!
//! Everything here is stateless and deterministic; one call owns all of its
//! intermediate nodes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixture;

pub use domain::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
