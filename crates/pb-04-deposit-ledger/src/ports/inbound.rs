//! # Inbound Ports
//!
//! API exposed by the deposit ledger.

use crate::domain::{LedgerError, MintReceipt};
use shared_types::{Address, BlockNumber, DepositIndex, Hash, U256};

/// Deposit ledger API - inbound port.
pub trait DepositLedgerApi {
    /// Prove the deposit contract's account against the state root of
    /// `block_number` and store its storage root.
    fn update_deposit_contract_storage_root(
        &mut self,
        block_number: BlockNumber,
        account_proof: &[u8],
    ) -> Result<Hash, LedgerError>;

    /// Prove deposit `index` against the storage root of `block_number` and
    /// mint it, at most once.
    fn mint(
        &mut self,
        index: DepositIndex,
        recipient: Address,
        claimed_amount: U256,
        block_number: BlockNumber,
        storage_proof: &[u8],
    ) -> Result<MintReceipt, LedgerError>;

    /// Stored storage root for a block.
    fn deposit_contract_storage_root(&self, block_number: BlockNumber) -> Option<Hash>;

    /// Whether deposit `index` was minted.
    fn is_redeemed(&self, index: DepositIndex) -> bool;
}
