//! # Inbound Ports
//!
//! API the oracle exposes to callers and to the deposit ledger.

use crate::domain::OracleError;
use shared_types::{Address, BlockNumber, ChainId, Hash};

/// Read side of the oracle: the deposit ledger only needs lookups.
pub trait StateRootProvider {
    /// State root relayed for `block_number`, if any.
    fn state_root(&self, block_number: BlockNumber) -> Option<Hash>;
}

/// State-root oracle API - inbound port.
pub trait StateRootOracleApi: StateRootProvider {
    /// Record `state_root` for `block_number` if `signature` is the
    /// relayer's recoverable signature over the attestation.
    fn relay_state_root(
        &mut self,
        block_number: BlockNumber,
        state_root: Hash,
        signature: &[u8],
    ) -> Result<(), OracleError>;

    /// The immutable relayer identity.
    fn relayer(&self) -> Address;

    /// The chain id attestations must name.
    fn chain_id(&self) -> ChainId;
}
