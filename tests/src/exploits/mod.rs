//! # Attack Simulations
//!
//! | Module | Attack |
//! |--------|--------|
//! | `double_mint` | Redeeming one deposit twice (replay, cross-block, concurrent) |
//! | `forged_attestation` | Relaying state roots without the relayer's key |
//! | `proof_forgery` | Proofs built from tries the source chain never committed to |

pub mod proof_forgery;
