//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{serde_hex_array, BlockNumber, Hash};

/// A relayed state root. Immutable once stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRootRecord {
    /// Source block number.
    pub block_number: BlockNumber,
    /// Attested state root.
    #[serde(with = "serde_hex_array")]
    pub state_root: Hash,
}
