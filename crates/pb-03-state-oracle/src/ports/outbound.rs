//! # Outbound Ports
//!
//! Source-chain access needed by the attestor.

use crate::domain::OracleError;
use async_trait::async_trait;
use shared_types::{BlockNumber, ChainId, Hash};

/// Source chain head and block data - outbound port.
#[async_trait]
pub trait ChainHeadSource: Send + Sync {
    /// Chain id reported by the node.
    async fn chain_id(&self) -> Result<ChainId, OracleError>;

    /// Number of the latest block.
    async fn latest_block_number(&self) -> Result<BlockNumber, OracleError>;

    /// State root of a block.
    async fn state_root_at(&self, block_number: BlockNumber) -> Result<Hash, OracleError>;
}
