//! # Account Records
//!
//! Decoding of the value stored in the state trie for one account.

use super::errors::ProofError;
use super::keys::account_key;
use super::verify::verify_proof;
use pb_01_rlp::{decode, decode_u64, decode_uint, encode_bytes, encode_list, encode_u64, encode_uint};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, U256};

/// Keccak256 of empty code, for accounts without contract code.
pub const EMPTY_CODE_HASH: Hash = [
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
];

/// Account state as committed in the state trie.
///
/// RLP-encoded as `[nonce, balance, storage_root, code_hash]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Transaction count (or contract creation count).
    pub nonce: u64,
    /// Balance in wei.
    pub balance: U256,
    /// Root of the account's storage trie.
    pub storage_root: Hash,
    /// Keccak256 of the account's code.
    pub code_hash: Hash,
}

impl AccountState {
    /// Decode an account record from the bytes stored in a state-trie leaf.
    pub fn decode(value: &[u8]) -> Result<Self, ProofError> {
        let item = decode(value)?;
        let fields = item
            .as_list()
            .map_err(|_| ProofError::InvalidAccountRecord("not a list"))?;
        if fields.len() != 4 {
            return Err(ProofError::InvalidAccountRecord("expected 4 fields"));
        }

        let nonce = decode_u64(&fields[0])?;
        let balance = decode_uint(&fields[1])?;
        let storage_root = hash_field(&fields[2], "storage root is not 32 bytes")?;
        let code_hash = hash_field(&fields[3], "code hash is not 32 bytes")?;

        Ok(Self {
            nonce,
            balance,
            storage_root,
            code_hash,
        })
    }

    /// RLP-encode this account record.
    pub fn rlp_encode(&self) -> Vec<u8> {
        encode_list(&[
            encode_u64(self.nonce),
            encode_uint(self.balance),
            encode_bytes(&self.storage_root),
            encode_bytes(&self.code_hash),
        ])
    }
}

fn hash_field(item: &pb_01_rlp::RlpItem, reason: &'static str) -> Result<Hash, ProofError> {
    item.as_bytes()?
        .try_into()
        .map_err(|_| ProofError::InvalidAccountRecord(reason))
}

/// Verify an account proof and decode the proved account.
pub fn verify_account(
    state_root: &Hash,
    address: &Address,
    proof: &[Vec<u8>],
) -> Result<AccountState, ProofError> {
    let value = verify_proof(state_root, &account_key(address), proof)?;
    AccountState::decode(&value)
}
