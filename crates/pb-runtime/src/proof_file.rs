//! # Proof Documents
//!
//! `eth_getProof` results, either bare or wrapped in a JSON-RPC response:
//!
//! ```json
//! {
//!   "accountProof": ["0xf90211...", "..."],
//!   "storageHash": "0x...",
//!   "storageProof": [{ "key": "0x...", "value": "0x1", "proof": ["0x..."] }]
//! }
//! ```

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use shared_types::{parse_hex_bytes, Hash};
use std::fs;
use std::path::Path;

/// One storage slot proof.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageProofEntry {
    /// Slot, possibly without leading zeros.
    pub key: String,
    /// Claimed value, informational only.
    #[serde(default)]
    pub value: Option<String>,
    /// RLP-encoded nodes, root first.
    pub proof: Vec<String>,
}

/// An `eth_getProof` result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofDocument {
    /// Account address, if present.
    #[serde(default)]
    pub address: Option<String>,
    /// RLP-encoded state-trie nodes, root first.
    #[serde(default)]
    pub account_proof: Vec<String>,
    /// Storage root claimed by the node, informational only.
    #[serde(default)]
    pub storage_hash: Option<String>,
    /// Storage proofs.
    #[serde(default)]
    pub storage_proof: Vec<StorageProofEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Rpc { result: ProofDocument },
    Bare(ProofDocument),
}

impl ProofDocument {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let envelope: Envelope =
            serde_json::from_str(json).context("Not an eth_getProof document")?;
        Ok(match envelope {
            Envelope::Rpc { result } => result,
            Envelope::Bare(document) => document,
        })
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read proof file {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Decoded account proof nodes.
    pub fn account_nodes(&self) -> Result<Vec<Vec<u8>>> {
        if self.account_proof.is_empty() {
            bail!("Document has no accountProof");
        }
        decode_nodes(&self.account_proof)
    }

    /// Decoded proof nodes for `slot`.
    pub fn storage_nodes(&self, slot: &Hash) -> Result<Vec<Vec<u8>>> {
        for entry in &self.storage_proof {
            if parse_word(&entry.key)? == *slot {
                return decode_nodes(&entry.proof);
            }
        }
        Err(anyhow!(
            "Document has no storageProof for slot {}",
            shared_types::to_hex_prefixed(slot)
        ))
    }
}

fn decode_nodes(nodes: &[String]) -> Result<Vec<Vec<u8>>> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            parse_hex_bytes(node).with_context(|| format!("Proof node {i} is not valid hex"))
        })
        .collect()
}

/// Parse a quantity-style hex word (`0x0`, `0x3`, full 32 bytes) left-padded to 32 bytes.
pub fn parse_word(input: &str) -> Result<Hash> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.len() > 64 {
        bail!("Word {input:?} is longer than 32 bytes");
    }
    let mut padded = "0".repeat(64 - digits.len());
    padded.push_str(digits);
    let bytes = parse_hex_bytes(&padded).with_context(|| format!("Invalid word {input:?}"))?;
    let mut word = [0u8; 32];
    word.copy_from_slice(&bytes);
    Ok(word)
}
