//! Ports layer for the deposit ledger.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
