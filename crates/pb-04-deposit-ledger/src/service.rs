//! # Bridge Service
//!
//! Oracle, ledger and token behind one `parking_lot::Mutex`. Every operation
//! takes `&self` and runs to completion under the lock, so concurrent
//! redemptions of one deposit index yield exactly one success.

use crate::domain::{LedgerConfig, LedgerError, MintReceipt};
use crate::events::BridgeEvent;
use crate::ledger::DepositLedger;
use crate::ports::{DepositLedgerApi, WrappedToken};
use parking_lot::Mutex;
use pb_03_state_oracle::{
    OracleConfig, StateRootOracle, StateRootOracleApi, StateRootProvider, StateRootRecord,
};
use shared_types::{Address, BlockNumber, DepositIndex, Hash, U256};

/// Thread-safe bridge core.
#[derive(Debug)]
pub struct BridgeService<T> {
    inner: Mutex<DepositLedger<StateRootOracle, T>>,
}

impl<T: WrappedToken> BridgeService<T> {
    /// Build the oracle and ledger from their configs around `token`.
    pub fn new(
        oracle_config: &OracleConfig,
        ledger_config: &LedgerConfig,
        token: T,
    ) -> Result<Self, LedgerError> {
        let oracle = StateRootOracle::from_config(oracle_config);
        Ok(Self::from_ledger(DepositLedger::new(
            ledger_config,
            oracle,
            token,
        )?))
    }

    /// Wrap an existing ledger.
    pub fn from_ledger(ledger: DepositLedger<StateRootOracle, T>) -> Self {
        Self {
            inner: Mutex::new(ledger),
        }
    }

    /// Relay a relayer-signed state root.
    pub fn relay_state_root(
        &self,
        block_number: BlockNumber,
        state_root: Hash,
        signature: &[u8],
    ) -> Result<(), LedgerError> {
        self.inner
            .lock()
            .oracle_mut()
            .relay_state_root(block_number, state_root, signature)?;
        Ok(())
    }

    /// Relay a raw attestation message and its signature.
    pub fn relay_signed_message(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Result<StateRootRecord, LedgerError> {
        Ok(self
            .inner
            .lock()
            .oracle_mut()
            .relay_signed_message(message, signature)?)
    }

    /// See [`DepositLedgerApi::update_deposit_contract_storage_root`].
    pub fn update_deposit_contract_storage_root(
        &self,
        block_number: BlockNumber,
        account_proof: &[u8],
    ) -> Result<Hash, LedgerError> {
        self.inner
            .lock()
            .update_deposit_contract_storage_root(block_number, account_proof)
    }

    /// See [`DepositLedgerApi::mint`].
    pub fn mint(
        &self,
        index: DepositIndex,
        recipient: Address,
        claimed_amount: U256,
        block_number: BlockNumber,
        storage_proof: &[u8],
    ) -> Result<MintReceipt, LedgerError> {
        self.inner
            .lock()
            .mint(index, recipient, claimed_amount, block_number, storage_proof)
    }

    /// Relayed state root for a block.
    pub fn state_root(&self, block_number: BlockNumber) -> Option<Hash> {
        self.inner.lock().oracle().state_root(block_number)
    }

    /// Stored storage root for a block.
    pub fn storage_root(&self, block_number: BlockNumber) -> Option<Hash> {
        self.inner.lock().deposit_contract_storage_root(block_number)
    }

    /// Whether a deposit was minted.
    pub fn is_redeemed(&self, index: DepositIndex) -> bool {
        self.inner.lock().is_redeemed(index)
    }

    /// Wrapped-token balance.
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.inner.lock().token().balance_of(account)
    }

    /// Wrapped-token supply.
    pub fn total_supply(&self) -> U256 {
        self.inner.lock().token().total_supply()
    }

    /// Take all oracle events followed by all ledger events.
    pub fn drain_events(&self) -> Vec<BridgeEvent> {
        let mut ledger = self.inner.lock();
        let mut events: Vec<BridgeEvent> = ledger
            .oracle_mut()
            .drain_events()
            .into_iter()
            .map(BridgeEvent::from)
            .collect();
        events.extend(ledger.drain_events().into_iter().map(BridgeEvent::from));
        events
    }
}
