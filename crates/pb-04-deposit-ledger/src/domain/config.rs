//! # Ledger Configuration

use super::commitment::CommitmentScheme;
use super::errors::LedgerError;
use super::fees::FeeParameters;
use serde::{Deserialize, Serialize};
use shared_types::{serde_hex_array, Address, U256};

/// Storage slot of the deposit mapping in the source contract.
pub const DEFAULT_DEPOSITS_SLOT: u64 = 3;

/// 1%.
pub const DEFAULT_MINT_FEE_RATE: u64 = 10_000_000_000_000_000;

/// Fee recipient used when none is configured.
pub const DEFAULT_FEE_RECIPIENT: Address = [
    0x42, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Deposit ledger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Source-chain deposit contract whose storage is proved.
    #[serde(with = "serde_hex_array")]
    pub deposit_contract: Address,
    /// Base slot of the `index => record` mapping.
    pub deposits_slot: u64,
    /// Fixed-point fee rate, `1e18` = 100%.
    pub mint_fee_rate: u64,
    /// Receiver of mint fees.
    #[serde(with = "serde_hex_array")]
    pub fee_recipient: Address,
    /// Layout of a deposit slot.
    pub commitment_scheme: CommitmentScheme,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            deposit_contract: [0u8; 20],
            deposits_slot: DEFAULT_DEPOSITS_SLOT,
            mint_fee_rate: DEFAULT_MINT_FEE_RATE,
            fee_recipient: DEFAULT_FEE_RECIPIENT,
            commitment_scheme: CommitmentScheme::default(),
        }
    }
}

impl LedgerConfig {
    /// Config for `deposit_contract` with default fees and layout.
    pub fn for_contract(deposit_contract: Address) -> Self {
        Self {
            deposit_contract,
            ..Self::default()
        }
    }

    /// Builder: set the fee rate.
    pub fn with_mint_fee_rate(mut self, rate: u64) -> Self {
        self.mint_fee_rate = rate;
        self
    }

    /// Builder: set the fee recipient.
    pub fn with_fee_recipient(mut self, recipient: Address) -> Self {
        self.fee_recipient = recipient;
        self
    }

    /// Builder: set the commitment scheme.
    pub fn with_commitment_scheme(mut self, scheme: CommitmentScheme) -> Self {
        self.commitment_scheme = scheme;
        self
    }

    /// Builder: set the mapping slot.
    pub fn with_deposits_slot(mut self, slot: u64) -> Self {
        self.deposits_slot = slot;
        self
    }

    /// Parse from TOML; missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, LedgerError> {
        toml::from_str(content).map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Validated fee parameters.
    pub fn fee_parameters(&self) -> Result<FeeParameters, LedgerError> {
        FeeParameters::new(U256::from(self.mint_fee_rate), self.fee_recipient)
    }
}
