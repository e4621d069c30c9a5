//! # State-Root Attestor
//!
//! Off-chain signer: looks up a block on the source chain, checks it is
//! deep enough, and signs the attestation with the relayer key.
//!
//! ```text
//! ChainHeadSource ──latest, stateRoot──→ StateRootAttestor ──OracleResponse──→ relayer tx
//!                                              │
//!                                   RelayerKeyPair (EIP-191)
//! ```

use crate::domain::{invariant_sufficient_confirmations, Attestation, OracleError};
use crate::ports::ChainHeadSource;
use serde::{Deserialize, Serialize};
use shared_crypto::{checksum_address, RelayerKeyPair};
use shared_types::{parse_hex_bytes, to_hex_prefixed, BlockNumber};
use tracing::{debug, info};

/// Signed message plus signature, both `0x` hex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationEnvelope {
    /// 65-byte `r ‖ s ‖ v` signature.
    pub signature: String,
    /// 96-byte ABI-encoded attestation.
    pub message: String,
}

/// Attestor response, in the JSON shape relayers consume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleResponse {
    /// Signed envelope.
    pub envelope: AttestationEnvelope,
    /// Decimal chain id.
    pub chain_id: String,
    /// Decimal block number.
    pub block_number: String,
    /// Confirmation depth that was enforced.
    pub confirmations: u64,
    /// EIP-55 address of the signer.
    pub signer_account: String,
}

impl OracleResponse {
    /// Decode the envelope into `(attestation, signature bytes)`.
    pub fn decode_envelope(&self) -> Result<(Attestation, Vec<u8>), OracleError> {
        let message = parse_hex_bytes(&self.envelope.message)
            .map_err(|_| OracleError::MalformedAttestation("message is not hex"))?;
        let signature = parse_hex_bytes(&self.envelope.signature)
            .map_err(|_| OracleError::MalformedAttestation("signature is not hex"))?;
        Ok((Attestation::parse(&message)?, signature))
    }

    /// Serialise to the JSON wire shape.
    pub fn to_json(&self) -> Result<String, OracleError> {
        serde_json::to_string(self).map_err(|e| OracleError::Config(e.to_string()))
    }
}

/// Signs state roots of sufficiently confirmed blocks.
pub struct StateRootAttestor<S: ChainHeadSource> {
    source: S,
    key: RelayerKeyPair,
    confirmations: u64,
}

impl<S: ChainHeadSource> StateRootAttestor<S> {
    /// Create an attestor over `source`, signing with `key`.
    pub fn new(source: S, key: RelayerKeyPair, confirmations: u64) -> Self {
        Self {
            source,
            key,
            confirmations,
        }
    }

    /// The chain source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Enforced confirmation depth.
    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }

    /// Attest to the state root of `block_number`.
    pub async fn attest(&self, block_number: BlockNumber) -> Result<OracleResponse, OracleError> {
        let chain_id = self.source.chain_id().await?;
        let latest = self.source.latest_block_number().await?;
        debug!(
            "[pb-03] Latest block {}, confirmed tip {}",
            latest,
            crate::domain::confirmed_tip(latest, self.confirmations)
        );
        invariant_sufficient_confirmations(block_number, latest, self.confirmations)?;

        let state_root = self.source.state_root_at(block_number).await?;
        let attestation = Attestation::new(chain_id, block_number, state_root);
        let message = attestation.encode();
        let signature = self
            .key
            .sign_personal_message(&message)
            .map_err(|e| OracleError::Signing(e.to_string()))?;

        info!(
            "[pb-03] Signed state root {} for block {} on chain {}",
            to_hex_prefixed(&state_root),
            block_number,
            chain_id
        );

        Ok(OracleResponse {
            envelope: AttestationEnvelope {
                signature: to_hex_prefixed(&signature.to_bytes()),
                message: to_hex_prefixed(&message),
            },
            chain_id: chain_id.to_string(),
            block_number: block_number.to_string(),
            confirmations: self.confirmations,
            signer_account: checksum_address(&self.key.address()),
        })
    }
}
