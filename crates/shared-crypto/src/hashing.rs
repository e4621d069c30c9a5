//! # Keccak256 Hashing
//!
//! Keccak256 (the pre-standard SHA-3 variant used by Ethereum) and the
//! EIP-191 personal-message digest.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Prefix for EIP-191 version `0x45` personal messages.
const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Hash data with Keccak256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Hash the concatenation of several byte slices.
pub fn keccak256_concat(parts: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// EIP-191 personal-message digest:
/// `keccak256("\x19Ethereum Signed Message:\n" ‖ len(message) ‖ message)`.
pub fn eip191_hash(message: &[u8]) -> Hash {
    let len = message.len().to_string();
    keccak256_concat(&[PERSONAL_MESSAGE_PREFIX, len.as_bytes(), message])
}
