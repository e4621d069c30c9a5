//! # Simulated Source Chain
//!
//! A deposit contract whose storage trie holds `mapping(uint256 => bytes32)`
//! at slot 3, embedded in a state trie with a few unrelated accounts. Each
//! call to [`SourceChain::seal`] snapshots both tries as a block.

use pb_02_trie_proof::fixture::FixtureTrie;
use pb_02_trie_proof::{encode_proof, mapping_slot, AccountState, EMPTY_CODE_HASH, EMPTY_TRIE_ROOT};
use pb_03_state_oracle::{Attestation, OracleConfig};
use pb_04_deposit_ledger::{
    deposit_commitment, BridgeService, InMemoryWrappedToken, LedgerConfig, DEFAULT_DEPOSITS_SLOT,
};
use shared_crypto::RelayerKeyPair;
use shared_types::{Address, BlockNumber, Hash, U256};

/// Deposit contract address.
pub const DEPOSIT_CONTRACT: Address = [0xdc; 20];

/// Source chain id.
pub const CHAIN_ID: u64 = 1;

/// Deterministic relayer key.
pub fn relayer() -> RelayerKeyPair {
    RelayerKeyPair::from_bytes(&[0x42; 32]).expect("valid secret key")
}

/// One unit of an 18-decimal token.
pub fn unit() -> U256 {
    U256::exp10(18)
}

/// Storage slot of deposit `index`.
pub fn deposit_slot(index: u64) -> Hash {
    mapping_slot(U256::from(index), U256::from(DEFAULT_DEPOSITS_SLOT))
}

/// A sealed block: roots plus the tries to prove against.
#[derive(Clone)]
pub struct Block {
    /// Block number.
    pub number: BlockNumber,
    /// State trie.
    pub state: FixtureTrie,
    /// Deposit contract storage trie.
    pub storage: FixtureTrie,
}

impl Block {
    /// State root.
    pub fn state_root(&self) -> Hash {
        self.state.root()
    }

    /// Deposit contract storage root.
    pub fn storage_root(&self) -> Hash {
        self.storage.root()
    }

    /// Account proof blob for the deposit contract.
    pub fn account_blob(&self) -> Vec<u8> {
        encode_proof(&self.state.account_proof(&DEPOSIT_CONTRACT))
    }

    /// Storage proof blob for deposit `index`.
    pub fn storage_blob(&self, index: u64) -> Vec<u8> {
        encode_proof(&self.storage.storage_proof(&deposit_slot(index)))
    }

    /// Relayer signature over this block's state root.
    pub fn signature(&self) -> Vec<u8> {
        sign_state_root(&relayer(), CHAIN_ID, self.number, self.state_root())
    }
}

/// Sign `(chain_id, block_number, state_root)` with `key`.
pub fn sign_state_root(
    key: &RelayerKeyPair,
    chain_id: u64,
    block_number: BlockNumber,
    state_root: Hash,
) -> Vec<u8> {
    let digest = Attestation::new(chain_id, block_number, state_root).digest();
    key.sign_prehash(&digest)
        .expect("signing succeeds")
        .to_bytes()
        .to_vec()
}

/// Source chain with an append-only deposit log.
pub struct SourceChain {
    storage: FixtureTrie,
    next_index: u64,
    height: BlockNumber,
}

impl Default for SourceChain {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceChain {
    /// Empty chain at height 0.
    pub fn new() -> Self {
        Self {
            storage: FixtureTrie::new(),
            next_index: 0,
            height: 0,
        }
    }

    /// Record a hashed deposit; returns its index.
    pub fn deposit(&mut self, amount: U256, recipient: Address) -> u64 {
        let word = U256::from_big_endian(&deposit_commitment(amount, &recipient));
        self.write_slot(word)
    }

    /// Record a raw slot word; returns its index.
    pub fn write_slot(&mut self, word: U256) -> u64 {
        let index = self.next_index;
        self.storage.insert_storage(&deposit_slot(index), word);
        self.next_index += 1;
        index
    }

    /// Advance to `number` and snapshot.
    pub fn seal(&mut self, number: BlockNumber) -> Block {
        self.height = number;
        let mut state = FixtureTrie::new();
        state.insert_account(
            &DEPOSIT_CONTRACT,
            &AccountState {
                nonce: 1,
                balance: U256::zero(),
                storage_root: self.storage.root(),
                code_hash: shared_crypto::keccak256(b"deposit contract"),
            },
        );
        for byte in 1u8..=6 {
            state.insert_account(
                &[byte; 20],
                &AccountState {
                    nonce: u64::from(byte),
                    balance: unit() * U256::from(byte),
                    storage_root: EMPTY_TRIE_ROOT,
                    code_hash: EMPTY_CODE_HASH,
                },
            );
        }
        Block {
            number,
            state,
            storage: self.storage.clone(),
        }
    }
}

/// Oracle config trusting [`relayer`].
pub fn oracle_config() -> OracleConfig {
    OracleConfig {
        chain_id: CHAIN_ID,
        relayer: relayer().address(),
        ..OracleConfig::default()
    }
}

/// Bridge service with default fees over [`DEPOSIT_CONTRACT`].
pub fn bridge() -> BridgeService<InMemoryWrappedToken> {
    bridge_with(LedgerConfig::for_contract(DEPOSIT_CONTRACT))
}

/// Bridge service with a custom ledger config.
pub fn bridge_with(config: LedgerConfig) -> BridgeService<InMemoryWrappedToken> {
    BridgeService::new(&oracle_config(), &config, InMemoryWrappedToken::new())
        .expect("valid ledger config")
}
