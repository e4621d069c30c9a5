//! # Bridge Runtime
//!
//! Library half of the `pb-runtime` binary.
//!
//! - `config/` - TOML file plus `PB_*` environment overrides
//! - `logging` - `tracing-subscriber` setup
//! - `proof_file` - `eth_getProof` JSON documents
//! - `commands` - the CLI subcommands

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod config;
pub mod logging;
pub mod proof_file;

pub use config::{LogConfig, RuntimeConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
