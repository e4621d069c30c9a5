//! # Trie Keys and Storage Values
//!
//! Secure-trie key derivation and storage slot layout for a Solidity
//! `mapping(uint256 => ...)` declared at a given base slot.

use super::errors::ProofError;
use super::verify::verify_proof;
use pb_01_rlp::{decode, decode_uint};
use shared_crypto::{keccak256, keccak256_concat};
use shared_types::{u256_to_be_bytes, Address, Hash, U256};

/// State-trie key of an account: `keccak256(address)`.
pub fn account_key(address: &Address) -> Hash {
    keccak256(address)
}

/// Storage slot of `mapping[index]` for a mapping at `slot_base`:
/// `keccak256(pad32(index) ‖ pad32(slot_base))`.
pub fn mapping_slot(index: U256, slot_base: U256) -> Hash {
    keccak256_concat(&[&u256_to_be_bytes(index), &u256_to_be_bytes(slot_base)])
}

/// Storage-trie key of a slot: `keccak256(slot)`.
pub fn storage_trie_key(slot: &Hash) -> Hash {
    keccak256(slot)
}

/// Decode a storage-trie leaf value: an RLP string holding a minimal
/// big-endian integer.
pub fn decode_storage_value(value: &[u8]) -> Result<U256, ProofError> {
    Ok(decode_uint(&decode(value)?)?)
}

/// Verify a storage proof for `slot` and decode the proved word.
pub fn verify_storage_value(
    storage_root: &Hash,
    slot: &Hash,
    proof: &[Vec<u8>],
) -> Result<U256, ProofError> {
    let value = verify_proof(storage_root, &storage_trie_key(slot), proof)?;
    decode_storage_value(&value)
}
