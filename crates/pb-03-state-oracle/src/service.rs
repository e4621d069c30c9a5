//! # State-Root Oracle Service
//!
//! Append-only `block number → state root` map guarded by a single relayer
//! signature check.

use crate::domain::{Attestation, OracleConfig, OracleError, StateRootRecord};
use crate::events::OracleEvent;
use crate::ports::{StateRootOracleApi, StateRootProvider};
use shared_crypto::{recover_address, RecoverableSignature};
use shared_types::{to_hex_prefixed, Address, BlockNumber, ChainId, Hash};
use std::collections::HashMap;
use tracing::{info, warn};

/// State-root oracle client.
///
/// The relayer and chain id are fixed at construction.
#[derive(Debug)]
pub struct StateRootOracle {
    relayer: Address,
    chain_id: ChainId,
    state_roots: HashMap<BlockNumber, Hash>,
    events: Vec<OracleEvent>,
}

impl StateRootOracle {
    /// Create an oracle trusting `relayer` for chain `chain_id`.
    pub fn new(relayer: Address, chain_id: ChainId) -> Self {
        info!(
            "[pb-03] Oracle created for chain {} with relayer {}",
            chain_id,
            to_hex_prefixed(&relayer)
        );
        Self {
            relayer,
            chain_id,
            state_roots: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(config.relayer, config.chain_id)
    }

    /// Relay a signed envelope as produced by the attestor: the raw message
    /// is parsed, its chain id checked, then relayed as usual.
    pub fn relay_signed_message(
        &mut self,
        message: &[u8],
        signature: &[u8],
    ) -> Result<StateRootRecord, OracleError> {
        let attestation = Attestation::parse(message)?;
        if attestation.chain_id != self.chain_id {
            return Err(OracleError::ChainIdMismatch {
                expected: self.chain_id,
                actual: attestation.chain_id,
            });
        }
        self.relay_state_root(attestation.block_number, attestation.state_root, signature)?;
        Ok(StateRootRecord {
            block_number: attestation.block_number,
            state_root: attestation.state_root,
        })
    }

    /// Stored record for a block.
    pub fn record(&self, block_number: BlockNumber) -> Option<StateRootRecord> {
        self.state_roots
            .get(&block_number)
            .map(|state_root| StateRootRecord {
                block_number,
                state_root: *state_root,
            })
    }

    /// Number of relayed blocks.
    pub fn len(&self) -> usize {
        self.state_roots.len()
    }

    /// Whether no block has been relayed.
    pub fn is_empty(&self) -> bool {
        self.state_roots.is_empty()
    }

    /// Take all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<OracleEvent> {
        std::mem::take(&mut self.events)
    }

    fn recover_signer(&self, digest: &Hash, signature: &[u8]) -> Option<Address> {
        let signature = RecoverableSignature::from_slice(signature).ok()?;
        recover_address(digest, &signature).ok()
    }
}

impl StateRootProvider for StateRootOracle {
    fn state_root(&self, block_number: BlockNumber) -> Option<Hash> {
        self.state_roots.get(&block_number).copied()
    }
}

impl StateRootOracleApi for StateRootOracle {
    fn relay_state_root(
        &mut self,
        block_number: BlockNumber,
        state_root: Hash,
        signature: &[u8],
    ) -> Result<(), OracleError> {
        let digest = Attestation::new(self.chain_id, block_number, state_root).digest();

        let recovered = self.recover_signer(&digest, signature);
        if recovered != Some(self.relayer) {
            warn!(
                "[pb-03] Rejected state root for block {}: signer {:?} is not the relayer",
                block_number,
                recovered.map(|a| to_hex_prefixed(&a))
            );
            return Err(OracleError::UnauthorizedRelayer {
                expected: self.relayer,
                recovered,
            });
        }

        if self.state_roots.contains_key(&block_number) {
            return Err(OracleError::DuplicateBlock(block_number));
        }

        self.state_roots.insert(block_number, state_root);
        self.events.push(OracleEvent::StateRootRelayed {
            block_number,
            state_root,
            relayer: self.relayer,
        });
        info!(
            block_number,
            state_root = %to_hex_prefixed(&state_root),
            "[pb-03] State root relayed"
        );
        Ok(())
    }

    fn relayer(&self) -> Address {
        self.relayer
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}
