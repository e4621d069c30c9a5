//! # Shared Types Crate
//!
//! Primitive types used across the bridge subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: hashes, addresses and amounts are defined once
//!   here so the codec, verifier, oracle and ledger agree on representations.
//! - **Fixed-size byte arrays**: hashes and addresses are plain arrays, never
//!   hex strings, inside the core. Hex only appears at the edges (CLI, JSON).

pub mod entities;
pub mod errors;
pub mod hex_codec;

pub use entities::*;
pub use errors::*;
pub use hex_codec::*;
