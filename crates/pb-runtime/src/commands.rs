//! # Subcommands
//!
//! Offline operations over `eth_getProof` documents, plus attestation
//! signing. Each returns a value; `main` prints it.

use crate::proof_file::ProofDocument;
use anyhow::{Context, Result};
use pb_02_trie_proof::{mapping_slot, verify_account, verify_storage_value, AccountState};
use pb_03_state_oracle::{InMemoryChainHead, OracleResponse, StateRootAttestor};
use shared_crypto::RelayerKeyPair;
use shared_types::{to_hex_prefixed, Address, BlockNumber, ChainId, DepositIndex, Hash, U256};
use std::path::Path;
use tracing::info;

/// Verify the account proof of `contract` in `proof_path` against `state_root`.
pub fn verify_account_file(
    proof_path: &Path,
    state_root: &Hash,
    contract: &Address,
) -> Result<AccountState> {
    let document = ProofDocument::load(proof_path)?;
    let nodes = document.account_nodes()?;
    let account = verify_account(state_root, contract, &nodes).with_context(|| {
        format!(
            "Account proof for {} does not verify against {}",
            to_hex_prefixed(contract),
            to_hex_prefixed(state_root)
        )
    })?;
    info!(
        contract = %to_hex_prefixed(contract),
        storage_root = %to_hex_prefixed(&account.storage_root),
        "[pb-runtime] Account proof verified"
    );
    Ok(account)
}

/// Verify the storage proof of deposit `index` in `proof_path` against
/// `storage_root` and return the slot's value.
pub fn verify_deposit_file(
    proof_path: &Path,
    storage_root: &Hash,
    index: DepositIndex,
    deposits_slot: u64,
) -> Result<U256> {
    let document = ProofDocument::load(proof_path)?;
    let slot = mapping_slot(U256::from(index), U256::from(deposits_slot));
    let nodes = document.storage_nodes(&slot)?;
    let value = verify_storage_value(storage_root, &slot, &nodes).with_context(|| {
        format!(
            "Storage proof for deposit {index} does not verify against {}",
            to_hex_prefixed(storage_root)
        )
    })?;
    info!(index, value = %value, "[pb-runtime] Deposit proof verified");
    Ok(value)
}

/// Inputs of the `attest` subcommand.
#[derive(Debug, Clone)]
pub struct AttestRequest {
    /// Source chain id.
    pub chain_id: ChainId,
    /// Block to attest.
    pub block_number: BlockNumber,
    /// Its state root.
    pub state_root: Hash,
    /// Current head of the source chain.
    pub latest: BlockNumber,
    /// Required depth.
    pub confirmations: u64,
}

/// Sign an attestation for a block observed by the caller.
pub async fn attest(key: RelayerKeyPair, request: &AttestRequest) -> Result<OracleResponse> {
    let source = InMemoryChainHead::new(request.chain_id)
        .with_block(request.block_number, request.state_root);
    source.set_latest(request.latest);

    let attestor = StateRootAttestor::new(source, key, request.confirmations);
    let response = attestor
        .attest(request.block_number)
        .await
        .context("Attestation refused")?;
    Ok(response)
}
