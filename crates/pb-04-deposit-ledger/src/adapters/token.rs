//! # In-Memory Wrapped Token
//!
//! Balance map with checked `U256` arithmetic. Used by tests and the runtime.

use crate::ports::{TokenError, WrappedToken};
use shared_types::{Address, Credit, U256};
use std::collections::HashMap;

/// In-memory wrapped token.
#[derive(Debug, Default)]
pub struct InMemoryWrappedToken {
    balances: HashMap<Address, U256>,
    total_supply: U256,
    rejecting: bool,
}

impl InMemoryWrappedToken {
    /// Create an empty token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent mints fail (for revert tests).
    pub fn set_rejecting(&mut self, rejecting: bool) {
        self.rejecting = rejecting;
    }

    /// Number of accounts with a balance entry.
    pub fn holders(&self) -> usize {
        self.balances.len()
    }
}

impl WrappedToken for InMemoryWrappedToken {
    fn mint_batch(&mut self, credits: &[Credit]) -> Result<(), TokenError> {
        if self.rejecting {
            return Err(TokenError::Rejected("token is rejecting mints".into()));
        }

        // Stage every update first so a failure leaves state untouched
        let mut supply = self.total_supply;
        let mut staged: HashMap<Address, U256> = HashMap::new();
        for credit in credits {
            supply = supply
                .checked_add(credit.amount)
                .ok_or(TokenError::SupplyOverflow)?;
            let current = staged
                .get(&credit.to)
                .copied()
                .unwrap_or_else(|| self.balance_of(&credit.to));
            let next = current
                .checked_add(credit.amount)
                .ok_or(TokenError::BalanceOverflow)?;
            staged.insert(credit.to, next);
        }

        self.balances.extend(staged);
        self.total_supply = supply;
        Ok(())
    }

    fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> U256 {
        self.total_supply
    }
}
