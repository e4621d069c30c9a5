//! # Ports
//!
//! Inbound API of the oracle and outbound dependencies of the attestor.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
