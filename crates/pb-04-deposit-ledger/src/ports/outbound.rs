//! # Outbound Ports
//!
//! The wrapped token the ledger mints into.

use shared_types::{Address, Credit, U256};
use thiserror::Error;

/// Token-side failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Total supply would exceed `U256::MAX`.
    #[error("Total supply overflow")]
    SupplyOverflow,

    /// An account balance would exceed `U256::MAX`.
    #[error("Balance overflow")]
    BalanceOverflow,

    /// The token refused to mint.
    #[error("Mint rejected: {0}")]
    Rejected(String),
}

/// Wrapped token - outbound port.
///
/// `mint_batch` is all-or-nothing: on error no credit has been applied.
pub trait WrappedToken {
    /// Apply every credit, or none.
    fn mint_batch(&mut self, credits: &[Credit]) -> Result<(), TokenError>;

    /// Balance of `account`.
    fn balance_of(&self, account: &Address) -> U256;

    /// Sum of all balances.
    fn total_supply(&self) -> U256;
}
