//! # Runtime Configuration
//!
//! Loaded from an optional TOML file, then overridden from the environment:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `PB_LOG_LEVEL` | `[log] level` |
//! | `PB_JSON_LOGS` | `[log] json` |
//! | `PB_RELAYER_KEY` | relayer signing key (never read from the file) |
//!
//! ```toml
//! [log]
//! level = "debug"
//!
//! [oracle]
//! chain_id = 1
//! relayer = "0x..."
//! environment = "production"
//! chain_handle = "eth-pow-mainnet"
//!
//! [ledger]
//! deposit_contract = "0x..."
//! deposits_slot = 3
//! ```

use anyhow::{Context, Result};
use pb_03_state_oracle::OracleConfig;
use pb_04_deposit_ledger::LedgerConfig;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    log: LogConfig,
    #[serde(default)]
    oracle: OracleConfig,
    #[serde(default)]
    ledger: LedgerConfig,
}

/// Complete runtime configuration.
#[derive(Clone, Default)]
pub struct RuntimeConfig {
    /// Logging.
    pub log: LogConfig,
    /// State-root oracle and attestor.
    pub oracle: OracleConfig,
    /// Deposit ledger.
    pub ledger: LedgerConfig,
    /// Hex secret key of the relayer.
    pub relayer_key: Option<Zeroizing<String>>,
}

impl fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("log", &self.log)
            .field("oracle", &self.oracle)
            .field("ledger", &self.ledger)
            .field("relayer_key", &self.relayer_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RuntimeConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("Invalid configuration file")?;
        Ok(Self {
            log: file.log,
            oracle: file.oracle,
            ledger: file.ledger,
            relayer_key: None,
        })
    }

    /// Load from `path` (defaults when `None`) and apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `PB_*` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PB_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(json) = lookup("PB_JSON_LOGS") {
            self.log.json = parse_flag(&json)
                .with_context(|| format!("PB_JSON_LOGS must be a boolean, got {json:?}"))?;
        }
        if let Some(key) = lookup("PB_RELAYER_KEY") {
            self.relayer_key = Some(Zeroizing::new(key));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
