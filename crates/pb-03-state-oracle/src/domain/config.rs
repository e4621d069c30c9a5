//! # Oracle Configuration
//!
//! Per-environment chain settings for the attestor and the oracle's own
//! construction parameters.

use super::errors::OracleError;
use serde::{Deserialize, Serialize};
use shared_types::{serde_hex_array, Address, ChainId};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Handle of the proof-of-stake chain.
pub const ETH_POS_MAINNET: &str = "eth-pos-mainnet";

/// Handle of the proof-of-work chain.
pub const ETH_POW_MAINNET: &str = "eth-pow-mainnet";

/// Deployment environment of the attestor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development; uses staging chains.
    Development,
    /// Test networks.
    Staging,
    /// Mainnets.
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(OracleError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        };
        f.write_str(s)
    }
}

/// Settings for one attested chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSettings {
    /// Blocks that must be mined on top before a block is signed.
    pub confirmations: u64,
}

/// Chain handle → settings for one environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainRegistry {
    environment: Environment,
    chains: BTreeMap<String, ChainSettings>,
}

impl ChainRegistry {
    /// Built-in registry for an environment.
    pub fn for_environment(environment: Environment) -> Self {
        let (pos, pow) = match environment {
            Environment::Production => (1, 10),
            Environment::Staging | Environment::Development => (1, 3),
        };
        let mut chains = BTreeMap::new();
        chains.insert(ETH_POS_MAINNET.to_string(), ChainSettings { confirmations: pos });
        chains.insert(ETH_POW_MAINNET.to_string(), ChainSettings { confirmations: pow });
        Self {
            environment,
            chains,
        }
    }

    /// Registry for an environment given by name.
    pub fn for_environment_name(name: &str) -> Result<Self, OracleError> {
        Ok(Self::for_environment(name.parse()?))
    }

    /// Override or add a chain (builder pattern).
    pub fn with_chain(mut self, handle: impl Into<String>, settings: ChainSettings) -> Self {
        self.chains.insert(handle.into(), settings);
        self
    }

    /// Look up a chain handle.
    pub fn get(&self, handle: &str) -> Result<&ChainSettings, OracleError> {
        self.chains
            .get(handle)
            .ok_or_else(|| OracleError::UnknownChain(handle.to_string()))
    }

    /// Environment this registry was built for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Registered handles, sorted.
    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }
}

/// Construction parameters of a [`crate::StateRootOracle`] and its attestor.
///
/// # Config File Format
///
/// ```toml
/// [oracle]
/// chain_id = 1
/// relayer = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
/// environment = "production"
/// chain_handle = "eth-pow-mainnet"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Chain id the relayer signs for.
    pub chain_id: ChainId,
    /// The only address whose attestations are accepted.
    #[serde(with = "serde_hex_array")]
    pub relayer: Address,
    /// Attestor environment.
    pub environment: Environment,
    /// Attested chain handle.
    pub chain_handle: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            relayer: [0u8; 20],
            environment: Environment::Production,
            chain_handle: ETH_POW_MAINNET.to_string(),
        }
    }
}

impl OracleConfig {
    /// Parse from a TOML document containing only oracle keys.
    pub fn from_toml_str(content: &str) -> Result<Self, OracleError> {
        toml::from_str(content).map_err(|e| OracleError::Config(e.to_string()))
    }

    /// Chain registry for the configured environment.
    pub fn registry(&self) -> ChainRegistry {
        ChainRegistry::for_environment(self.environment)
    }

    /// Confirmation depth of the configured chain.
    pub fn confirmations(&self) -> Result<u64, OracleError> {
        Ok(self.registry().get(&self.chain_handle)?.confirmations)
    }
}
