//! # Core Entities
//!
//! Primitive aliases for the source and destination chain data model.

use serde::{Deserialize, Serialize};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::{U256, U512};

/// A 32-byte Keccak256 hash (state roots, storage roots, slot keys).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Source chain block number.
pub type BlockNumber = u64;

/// Position of a deposit in the deposit contract's append-only log.
pub type DepositIndex = u64;

/// Numeric chain identifier as reported by `eth_chainId`.
pub type ChainId = u64;

/// The zero hash.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Fixed-point unit: `10^18` represents 100%.
pub const FIXED_POINT_ONE: u128 = 1_000_000_000_000_000_000;

/// A credit of `amount` wrapped tokens to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// Receiving account.
    pub to: Address,
    /// Amount in base units.
    pub amount: U256,
}

impl Credit {
    /// Create a new credit.
    pub fn new(to: Address, amount: U256) -> Self {
        Self { to, amount }
    }
}

/// Convert a `U256` into its 32-byte big-endian representation.
pub fn u256_to_be_bytes(value: U256) -> [u8; 32] {
    let mut out = [0u8; 32];
    value.to_big_endian(&mut out);
    out
}

/// Left-pad an address to a 32-byte word (ABI encoding of `address`).
pub fn address_to_word(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    word
}
