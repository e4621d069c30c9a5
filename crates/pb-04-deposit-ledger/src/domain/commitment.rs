//! # Deposit Commitments
//!
//! How a deposit record is laid out in its storage slot, and how the mint
//! amount is derived from the proved slot value.

use super::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_crypto::keccak256_concat;
use shared_types::{address_to_word, u256_to_be_bytes, Address, DepositIndex, Hash, U256};

/// Content of a deposit slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentScheme {
    /// `keccak256(abi.encode(uint256 amount, address recipient))`.
    #[default]
    Hashed,
    /// The amount itself.
    Amount,
}

/// `keccak256(abi.encode(amount, recipient))`.
pub fn deposit_commitment(amount: U256, recipient: &Address) -> Hash {
    keccak256_concat(&[&u256_to_be_bytes(amount), &address_to_word(recipient)])
}

impl CommitmentScheme {
    /// Derive the mint amount for deposit `index` from the proved slot value.
    ///
    /// An absent slot must be passed as zero. Under [`CommitmentScheme::Hashed`]
    /// the claim must name the committed amount, so a zero claim against a
    /// populated slot is a commitment mismatch.
    pub fn resolve(
        &self,
        index: DepositIndex,
        proved: U256,
        recipient: &Address,
        claimed: U256,
    ) -> Result<U256, LedgerError> {
        if proved.is_zero() {
            return Err(LedgerError::EmptyDeposit(index));
        }
        match self {
            CommitmentScheme::Hashed => {
                if claimed.is_zero() {
                    return Err(LedgerError::CommitmentMismatch(index));
                }
                let expected = U256::from_big_endian(&deposit_commitment(claimed, recipient));
                if expected != proved {
                    return Err(LedgerError::CommitmentMismatch(index));
                }
                Ok(claimed)
            }
            CommitmentScheme::Amount => {
                if !claimed.is_zero() && claimed != proved {
                    return Err(LedgerError::AmountMismatch { claimed, proved });
                }
                Ok(proved)
            }
        }
    }
}
