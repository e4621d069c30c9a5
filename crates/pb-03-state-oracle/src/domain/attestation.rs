//! # Attestation Message
//!
//! Canonical `abi.encode(uint256 chainId, uint256 blockNumber, bytes32 stateRoot)`.

use super::errors::OracleError;
use serde::{Deserialize, Serialize};
use shared_crypto::eip191_hash;
use shared_types::{BlockNumber, ChainId, Hash};

/// Length of the ABI-encoded attestation.
pub const ATTESTATION_MESSAGE_LEN: usize = 96;

/// A relayer's claim that `state_root` is the state root of `block_number`
/// on chain `chain_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Source chain id.
    pub chain_id: ChainId,
    /// Source block number.
    pub block_number: BlockNumber,
    /// State root of that block.
    pub state_root: Hash,
}

impl Attestation {
    /// Create a new attestation.
    pub fn new(chain_id: ChainId, block_number: BlockNumber, state_root: Hash) -> Self {
        Self {
            chain_id,
            block_number,
            state_root,
        }
    }

    /// ABI-encode as three 32-byte words.
    pub fn encode(&self) -> [u8; ATTESTATION_MESSAGE_LEN] {
        let mut out = [0u8; ATTESTATION_MESSAGE_LEN];
        out[24..32].copy_from_slice(&self.chain_id.to_be_bytes());
        out[56..64].copy_from_slice(&self.block_number.to_be_bytes());
        out[64..96].copy_from_slice(&self.state_root);
        out
    }

    /// Parse a signed message back into its fields.
    pub fn parse(message: &[u8]) -> Result<Self, OracleError> {
        if message.len() != ATTESTATION_MESSAGE_LEN {
            return Err(OracleError::MalformedAttestation("message must be 96 bytes"));
        }
        let chain_id = word_to_u64(&message[0..32])
            .ok_or(OracleError::MalformedAttestation("chain id exceeds 64 bits"))?;
        let block_number = word_to_u64(&message[32..64])
            .ok_or(OracleError::MalformedAttestation("block number exceeds 64 bits"))?;
        let mut state_root = [0u8; 32];
        state_root.copy_from_slice(&message[64..96]);

        Ok(Self {
            chain_id,
            block_number,
            state_root,
        })
    }

    /// EIP-191 personal-message digest the relayer signs.
    pub fn digest(&self) -> Hash {
        eip191_hash(&self.encode())
    }
}

fn word_to_u64(word: &[u8]) -> Option<u64> {
    if word[..24].iter().any(|b| *b != 0) {
        return None;
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[24..32]);
    Some(u64::from_be_bytes(buf))
}
