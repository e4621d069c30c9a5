//! # Oracle Events
//!
//! Recorded by [`crate::StateRootOracle`] and drained by the embedding service.

use serde::{Deserialize, Serialize};
use shared_types::{serde_hex_array, Address, BlockNumber, Hash};

/// Events emitted by the oracle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OracleEvent {
    /// A state root was accepted for a block.
    StateRootRelayed {
        /// Source block number.
        block_number: BlockNumber,
        /// Accepted root.
        #[serde(with = "serde_hex_array")]
        state_root: Hash,
        /// Relayer that signed it.
        #[serde(with = "serde_hex_array")]
        relayer: Address,
    },
}
