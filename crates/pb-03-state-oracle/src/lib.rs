//! # PB-03 State-Root Oracle
//!
//! Stores relayer-attested source-chain state roots, one per block number.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Accept a state root only with a valid signature from the single,
//!   immutable relayer identity configured at construction
//! - Keep records append-only: a block's root never changes once set
//! - Produce attestations off-chain, refusing blocks that are not yet
//!   `confirmations` deep
//!
//! ## Attestation Format
//!
//! | Bytes | Field |
//! |-------|-------|
//! | 0..32 | `uint256 chainId` |
//! | 32..64 | `uint256 blockNumber` |
//! | 64..96 | `bytes32 stateRoot` |
//!
//! The relayer signs the EIP-191 personal-message digest of these 96 bytes.
//!
//! ## Module Structure
//!
//! ```text
//! pb-03-state-oracle/
//! ├── domain/      # Attestation, records, config, invariants, errors
//! ├── ports/       # StateRootOracleApi, StateRootProvider, ChainHeadSource
//! ├── adapters/    # InMemoryChainHead
//! ├── service.rs   # StateRootOracle
//! └── attestor.rs  # StateRootAttestor
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod attestor;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::InMemoryChainHead;
pub use attestor::{AttestationEnvelope, OracleResponse, StateRootAttestor};
pub use domain::{
    confirmed_tip, invariant_sufficient_confirmations, Attestation, ChainRegistry, ChainSettings,
    Environment, OracleConfig, OracleError, StateRootRecord, ATTESTATION_MESSAGE_LEN,
    ETH_POS_MAINNET, ETH_POW_MAINNET,
};
pub use events::OracleEvent;
pub use ports::{ChainHeadSource, StateRootOracleApi, StateRootProvider};
pub use service::StateRootOracle;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
