//! # Domain Errors

use crate::ports::TokenError;
use pb_02_trie_proof::ProofError;
use pb_03_state_oracle::OracleError;
use shared_types::{BlockNumber, DepositIndex, U256};
use thiserror::Error;

/// Ledger errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// No state root relayed for the block.
    #[error("Unknown state root for block {0}")]
    UnknownStateRoot(BlockNumber),

    /// Storage root already fixed for the block.
    #[error("Storage root already set for block {0}")]
    DuplicateStorageRoot(BlockNumber),

    /// No storage root fixed for the block.
    #[error("Unknown storage root for block {0}")]
    UnknownStorageRoot(BlockNumber),

    /// Deposit already minted.
    #[error("Deposit {0} already redeemed")]
    AlreadyRedeemed(DepositIndex),

    /// Caller amount disagrees with the proved amount.
    #[error("Amount mismatch: claimed {claimed}, proved {proved}")]
    AmountMismatch {
        /// Amount supplied by the caller.
        claimed: U256,
        /// Amount committed on the source chain.
        proved: U256,
    },

    /// Caller's `(amount, recipient)` does not hash to the proved commitment.
    #[error("Deposit {0} commitment does not match claimed amount and recipient")]
    CommitmentMismatch(DepositIndex),

    /// The proved slot is zero or absent.
    #[error("Deposit {0} is empty")]
    EmptyDeposit(DepositIndex),

    /// Fee rate above 100%.
    #[error("Invalid fee rate {0}: must not exceed 1e18")]
    InvalidFeeRate(U256),

    /// Account or storage proof failed.
    #[error("Proof error: {0}")]
    Proof(#[from] ProofError),

    /// State-root relay failed.
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Token side effect failed; the redemption was rolled back.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}
