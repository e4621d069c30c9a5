//! # Domain Errors
//!
//! Error types for the state-root oracle and attestor.

use shared_types::{to_hex_prefixed, Address, BlockNumber, ChainId};
use thiserror::Error;

/// Oracle errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OracleError {
    /// Signature does not recover to the configured relayer.
    #[error("Unauthorized relayer: expected {}, recovered {}", to_hex_prefixed(.expected), recovered_str(.recovered))]
    UnauthorizedRelayer {
        /// Configured relayer.
        expected: Address,
        /// Recovered signer, if recovery succeeded at all.
        recovered: Option<Address>,
    },

    /// A state root for this block is already on file.
    #[error("State root already relayed for block {0}")]
    DuplicateBlock(BlockNumber),

    /// Signed message is not a 96-byte attestation.
    #[error("Malformed attestation: {0}")]
    MalformedAttestation(&'static str),

    /// Attestation was produced for another chain.
    #[error("Chain id mismatch: expected {expected}, got {actual}")]
    ChainIdMismatch {
        /// Chain this oracle serves.
        expected: ChainId,
        /// Chain named in the attestation.
        actual: ChainId,
    },

    /// Block is not yet deep enough to sign.
    #[error(
        "Block {block_number} cannot be signed: requires {confirmations} confirmations, \
         latest block {latest}, latest secure block {confirmed_tip}"
    )]
    InsufficientConfirmations {
        /// Requested block.
        block_number: BlockNumber,
        /// Required confirmation depth.
        confirmations: u64,
        /// Current chain head.
        latest: BlockNumber,
        /// `max(latest - confirmations, 0)`.
        confirmed_tip: BlockNumber,
    },

    /// No configuration for this chain handle.
    #[error("No config defined for chain handle '{0}'")]
    UnknownChain(String),

    /// No configuration for this deployment environment.
    #[error("No chain config for environment: {0}")]
    UnknownEnvironment(String),

    /// Chain head source failed.
    #[error("Chain source error: {0}")]
    ChainSource(String),

    /// Signing failed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn recovered_str(recovered: &Option<Address>) -> String {
    recovered
        .as_ref()
        .map(|a| to_hex_prefixed(a))
        .unwrap_or_else(|| "none".to_string())
}
