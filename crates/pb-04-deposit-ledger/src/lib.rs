//! # PB-04 Deposit Ledger
//!
//! Authorizes wrapped-token mints against proved source-chain deposits.
//!
//! **Subsystem ID:** 04
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! Two phases per source block:
//!
//! 1. `update_deposit_contract_storage_root`: an account proof against the
//!    relayed state root fixes the deposit contract's storage root
//! 2. `mint`: a storage proof against that storage root reveals one deposit
//!    record; the ledger mints `amount - fee` to the recipient and `fee` to
//!    the fee recipient, at most once per deposit index
//!
//! ## Security Properties
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Ordering | No storage root without a state root, no mint without a storage root |
//! | At-most-once | Redemption mark set before the token side effect |
//! | Revert on failure | A failed token mint clears the mark again |
//! | Exact fees | `net + fee == amount` in 512-bit intermediate arithmetic |
//!
//! ## Module Structure
//!
//! ```text
//! pb-04-deposit-ledger/
//! ├── domain/      # fees, commitments, records, config, errors
//! ├── ports/       # DepositLedgerApi, WrappedToken
//! ├── adapters/    # InMemoryWrappedToken
//! ├── ledger.rs    # DepositLedger
//! └── service.rs   # BridgeService (mutex-guarded)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ledger;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::InMemoryWrappedToken;
pub use domain::{
    deposit_commitment, split_fee, CommitmentScheme, DepositClaim, FeeParameters, LedgerConfig,
    LedgerError, MintReceipt, StorageRootRecord, DEFAULT_DEPOSITS_SLOT, DEFAULT_FEE_RECIPIENT,
    DEFAULT_MINT_FEE_RATE,
};
pub use events::{BridgeEvent, LedgerEvent};
pub use ledger::DepositLedger;
pub use ports::{DepositLedgerApi, TokenError, WrappedToken};
pub use service::BridgeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
