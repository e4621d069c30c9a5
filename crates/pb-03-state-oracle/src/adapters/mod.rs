//! # Adapters
//!
//! In-memory implementations of the outbound ports.

pub mod chain_head;

pub use chain_head::InMemoryChainHead;
