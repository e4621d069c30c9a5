//! # Logging Setup
//!
//! `RUST_LOG` wins over the configured level. Output goes to stderr so stdout
//! carries only command results.

use crate::config::LogConfig;
use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log filter {:?}", config.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        // JSON output for log shippers
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
