//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{serde_hex_array, Address, BlockNumber, DepositIndex, Hash, U256};

/// Storage root of the deposit contract at a block. Immutable once stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRootRecord {
    /// Source block number.
    pub block_number: BlockNumber,
    /// Proved storage root.
    #[serde(with = "serde_hex_array")]
    pub storage_root: Hash,
}

/// A caller's claim on one deposit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositClaim {
    /// Deposit index in the source contract.
    pub index: DepositIndex,
    /// Account to credit.
    pub recipient: Address,
    /// Claimed amount; zero defers to the proof under the amount scheme.
    pub amount: U256,
    /// Block whose storage root the proof is checked against.
    pub block_number: BlockNumber,
    /// RLP list of storage proof nodes.
    pub proof: Vec<u8>,
}

/// Outcome of a successful mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    /// Redeemed deposit.
    pub index: DepositIndex,
    /// Credited account.
    #[serde(with = "serde_hex_array")]
    pub recipient: Address,
    /// Deposit amount.
    pub amount: U256,
    /// `amount - fee`, credited to the recipient.
    pub net_amount: U256,
    /// Credited to the fee recipient.
    pub fee: U256,
}
