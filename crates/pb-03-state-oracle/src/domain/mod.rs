//! Domain layer for the state-root oracle.

pub mod attestation;
pub mod config;
pub mod entities;
pub mod errors;
pub mod invariants;

pub use attestation::*;
pub use config::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
