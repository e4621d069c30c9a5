//! # Bridge Runtime
//!
//! ```text
//! pb-runtime [--config bridge.toml] verify-account --proof p.json --state-root 0x.. [--contract 0x..]
//! pb-runtime [--config bridge.toml] verify-deposit --proof p.json --storage-root 0x.. --index N [--slot N]
//! pb-runtime [--config bridge.toml] attest --block N --state-root 0x.. --latest N [--chain-id N]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use pb_runtime::commands::{self, AttestRequest};
use pb_runtime::logging::init_logging;
use pb_runtime::RuntimeConfig;
use shared_crypto::RelayerKeyPair;
use shared_types::{parse_address, parse_hash, Address, Hash};

/// Proof-verified bridge core tooling
#[derive(Parser, Debug)]
#[command(name = "pb-runtime")]
#[command(version, about = "Verify bridge proofs and sign state-root attestations")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify an account proof and print the contract's storage root
    VerifyAccount {
        /// eth_getProof JSON file
        #[arg(long)]
        proof: PathBuf,
        /// Trusted state root
        #[arg(long, value_parser = parse_hash_arg)]
        state_root: Hash,
        /// Contract address (defaults to the configured deposit contract)
        #[arg(long, value_parser = parse_address_arg)]
        contract: Option<Address>,
    },
    /// Verify a deposit's storage proof and print the slot value
    VerifyDeposit {
        /// eth_getProof JSON file
        #[arg(long)]
        proof: PathBuf,
        /// Trusted storage root
        #[arg(long, value_parser = parse_hash_arg)]
        storage_root: Hash,
        /// Deposit index
        #[arg(long)]
        index: u64,
        /// Mapping slot (defaults to the configured slot)
        #[arg(long)]
        slot: Option<u64>,
    },
    /// Sign a state-root attestation with PB_RELAYER_KEY
    Attest {
        /// Block number
        #[arg(long)]
        block: u64,
        /// State root of that block
        #[arg(long, value_parser = parse_hash_arg)]
        state_root: Hash,
        /// Current head of the source chain
        #[arg(long)]
        latest: u64,
        /// Source chain id (defaults to the configured chain id)
        #[arg(long)]
        chain_id: Option<u64>,
    },
}

fn parse_hash_arg(s: &str) -> Result<Hash, String> {
    parse_hash(s).map_err(|e| e.to_string())
}

fn parse_address_arg(s: &str) -> Result<Address, String> {
    parse_address(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RuntimeConfig::load(cli.config.as_deref())?;
    init_logging(&config.log)?;
    debug!(?config, "[pb-runtime] Configuration loaded");

    match cli.command {
        Command::VerifyAccount {
            proof,
            state_root,
            contract,
        } => {
            let contract = contract.unwrap_or(config.ledger.deposit_contract);
            let account = commands::verify_account_file(&proof, &state_root, &contract)?;
            println!("{}", shared_types::to_hex_prefixed(&account.storage_root));
        }
        Command::VerifyDeposit {
            proof,
            storage_root,
            index,
            slot,
        } => {
            let slot = slot.unwrap_or(config.ledger.deposits_slot);
            let value = commands::verify_deposit_file(&proof, &storage_root, index, slot)?;
            println!("{value:#x}");
        }
        Command::Attest {
            block,
            state_root,
            latest,
            chain_id,
        } => {
            let secret = config
                .relayer_key
                .as_ref()
                .context("PB_RELAYER_KEY is not set")?;
            let key = RelayerKeyPair::from_hex(secret).context("PB_RELAYER_KEY is invalid")?;
            let request = AttestRequest {
                chain_id: chain_id.unwrap_or(config.oracle.chain_id),
                block_number: block,
                state_root,
                latest,
                confirmations: config.oracle.confirmations()?,
            };
            let response = commands::attest(key, &request).await?;
            println!("{}", response.to_json()?);
        }
    }

    Ok(())
}
