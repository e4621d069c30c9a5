//! Domain layer for the deposit ledger.

pub mod commitment;
pub mod config;
pub mod entities;
pub mod errors;
pub mod fees;

pub use commitment::*;
pub use config::*;
pub use entities::*;
pub use errors::*;
pub use fees::*;
