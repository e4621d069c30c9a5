//! # Domain Invariants
//!
//! Confirmation-depth rules for the attestor.

use super::errors::OracleError;
use shared_types::BlockNumber;

/// The highest block considered final: `max(latest - confirmations, 0)`.
pub fn confirmed_tip(latest: BlockNumber, confirmations: u64) -> BlockNumber {
    latest.saturating_sub(confirmations)
}

/// Invariant: a block is only signed once it is `confirmations` deep.
pub fn invariant_sufficient_confirmations(
    block_number: BlockNumber,
    latest: BlockNumber,
    confirmations: u64,
) -> Result<(), OracleError> {
    let tip = confirmed_tip(latest, confirmations);
    if block_number > tip {
        return Err(OracleError::InsufficientConfirmations {
            block_number,
            confirmations,
            latest,
            confirmed_tip: tip,
        });
    }
    Ok(())
}
