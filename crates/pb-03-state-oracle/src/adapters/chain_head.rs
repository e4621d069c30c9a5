//! In-memory chain head source.
//!
//! Backs the attestor in tests and in the offline CLI, where the block data
//! comes from files instead of a node.

use crate::domain::OracleError;
use crate::ports::ChainHeadSource;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{BlockNumber, ChainId, Hash};
use std::collections::BTreeMap;
use tracing::debug;

/// Chain head held in memory.
pub struct InMemoryChainHead {
    chain_id: ChainId,
    latest: RwLock<BlockNumber>,
    state_roots: RwLock<BTreeMap<BlockNumber, Hash>>,
    failing: RwLock<bool>,
}

impl InMemoryChainHead {
    /// Create an empty chain at height 0.
    pub fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            latest: RwLock::new(0),
            state_roots: RwLock::new(BTreeMap::new()),
            failing: RwLock::new(false),
        }
    }

    /// Record a block's state root (builder pattern). Advances the head if needed.
    pub fn with_block(self, block_number: BlockNumber, state_root: Hash) -> Self {
        self.push_block(block_number, state_root);
        self
    }

    /// Record a block's state root. Advances the head if needed.
    pub fn push_block(&self, block_number: BlockNumber, state_root: Hash) {
        self.state_roots.write().insert(block_number, state_root);
        let mut latest = self.latest.write();
        if block_number > *latest {
            *latest = block_number;
        }
    }

    /// Move the head to `block_number` without recording a root.
    pub fn set_latest(&self, block_number: BlockNumber) {
        *self.latest.write() = block_number;
    }

    /// Make every call fail, simulating an unreachable node.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.write() = failing;
    }

    fn check_available(&self) -> Result<(), OracleError> {
        if *self.failing.read() {
            return Err(OracleError::ChainSource("node unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainHeadSource for InMemoryChainHead {
    async fn chain_id(&self) -> Result<ChainId, OracleError> {
        self.check_available()?;
        Ok(self.chain_id)
    }

    async fn latest_block_number(&self) -> Result<BlockNumber, OracleError> {
        self.check_available()?;
        Ok(*self.latest.read())
    }

    async fn state_root_at(&self, block_number: BlockNumber) -> Result<Hash, OracleError> {
        self.check_available()?;
        debug!("[pb-03] Reading state root of block {}", block_number);
        self.state_roots
            .read()
            .get(&block_number)
            .copied()
            .ok_or_else(|| OracleError::ChainSource(format!("unknown block {block_number}")))
    }
}
