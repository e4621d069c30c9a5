//! # Ledger Events
//!
//! Recorded by [`crate::DepositLedger`]; [`BridgeEvent`] merges them with the
//! oracle's events for consumers of [`crate::BridgeService`].

use pb_03_state_oracle::OracleEvent;
use serde::{Deserialize, Serialize};
use shared_types::{serde_hex_array, Address, BlockNumber, DepositIndex, Hash, U256};

/// Events emitted by the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LedgerEvent {
    /// The deposit contract's storage root was proved for a block.
    StorageRootUpdated {
        /// Source block number.
        block_number: BlockNumber,
        /// Proved storage root.
        #[serde(with = "serde_hex_array")]
        storage_root: Hash,
    },
    /// A deposit was minted.
    DepositRedeemed {
        /// Deposit index.
        index: DepositIndex,
        /// Credited account.
        #[serde(with = "serde_hex_array")]
        recipient: Address,
        /// Net amount credited to the recipient.
        net_amount: U256,
        /// Fee credited to the fee recipient.
        fee: U256,
        /// Block the proof was checked against.
        block_number: BlockNumber,
    },
}

/// Any event of the bridge core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BridgeEvent {
    /// From the state-root oracle.
    Oracle(OracleEvent),
    /// From the deposit ledger.
    Ledger(LedgerEvent),
}

impl From<OracleEvent> for BridgeEvent {
    fn from(event: OracleEvent) -> Self {
        BridgeEvent::Oracle(event)
    }
}

impl From<LedgerEvent> for BridgeEvent {
    fn from(event: LedgerEvent) -> Self {
        BridgeEvent::Ledger(event)
    }
}
