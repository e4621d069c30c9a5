//! # Fee Arithmetic
//!
//! `fee = floor(amount * rate / 1e18)`, computed with a 512-bit intermediate so
//! no `(amount, rate)` pair overflows. `net = amount - fee`, hence
//! `net + fee == amount` exactly.

use super::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_types::{serde_hex_array, Address, FIXED_POINT_ONE, U256, U512};

/// Mint fee rate and the account that receives it. Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeParameters {
    /// Fixed-point fee rate, `1e18` = 100%.
    pub mint_fee_rate: U256,
    /// Receiver of the fee share.
    #[serde(with = "serde_hex_array")]
    pub fee_recipient: Address,
}

impl FeeParameters {
    /// Validate and build fee parameters.
    pub fn new(mint_fee_rate: U256, fee_recipient: Address) -> Result<Self, LedgerError> {
        if mint_fee_rate > U256::from(FIXED_POINT_ONE) {
            return Err(LedgerError::InvalidFeeRate(mint_fee_rate));
        }
        Ok(Self {
            mint_fee_rate,
            fee_recipient,
        })
    }

    /// Split `amount` into `(net, fee)`.
    pub fn split(&self, amount: U256) -> (U256, U256) {
        split_fee(amount, self.mint_fee_rate)
    }
}

/// Split `amount` into `(net, fee)` at fixed-point `rate`.
///
/// `rate` must not exceed `1e18`; [`FeeParameters::new`] enforces that. Larger
/// rates saturate the fee at `amount`.
pub fn split_fee(amount: U256, rate: U256) -> (U256, U256) {
    let product: U512 = amount.full_mul(rate);
    let quotient = product / U512::from(FIXED_POINT_ONE);
    let fee = U256::try_from(quotient).unwrap_or(amount).min(amount);
    (amount - fee, fee)
}
