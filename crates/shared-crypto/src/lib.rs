//! # Shared Crypto
//!
//! Cryptographic primitives used by the bridge.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak256, EIP-191 | Trie node hashing, slot keys, personal-message digests |
//! | `ecdsa` | secp256k1 (recoverable) | Relayer attestations |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S enforced on recovery (EIP-2)
//! - **Secret keys**: intermediate key buffers are zeroized

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{
    address_from_pubkey, checksum_address, recover_address, RecoverableSignature, RelayerKeyPair,
};
pub use errors::CryptoError;
pub use hashing::{eip191_hash, keccak256, keccak256_concat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
