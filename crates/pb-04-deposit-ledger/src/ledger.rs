//! # Deposit Ledger
//!
//! Two-phase authorization of wrapped-token mints:
//!
//! ```text
//! state root (oracle) ──account proof──▶ storage root ──storage proof──▶ mint
//! ```
//!
//! The redemption mark of a deposit index is set before the token is asked to
//! mint and is only cleared again if that mint fails.

use crate::domain::{
    CommitmentScheme, DepositClaim, FeeParameters, LedgerConfig, LedgerError, MintReceipt,
    StorageRootRecord,
};
use crate::events::LedgerEvent;
use crate::ports::{DepositLedgerApi, WrappedToken};
use pb_02_trie_proof::{
    decode_proof, mapping_slot, verify_account, verify_storage_value, ProofError,
};
use pb_03_state_oracle::StateRootProvider;
use shared_types::{to_hex_prefixed, Address, BlockNumber, Credit, DepositIndex, Hash, U256};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Deposit-proof authorization ledger.
///
/// Owns the state-root source `O` and the wrapped token `T`.
#[derive(Debug)]
pub struct DepositLedger<O, T> {
    oracle: O,
    token: T,
    deposit_contract: Address,
    deposits_slot: U256,
    fees: FeeParameters,
    scheme: CommitmentScheme,
    storage_roots: HashMap<BlockNumber, Hash>,
    redeemed: HashSet<DepositIndex>,
    events: Vec<LedgerEvent>,
}

impl<O: StateRootProvider, T: WrappedToken> DepositLedger<O, T> {
    /// Create a ledger. Fails if the configured fee rate exceeds 100%.
    pub fn new(config: &LedgerConfig, oracle: O, token: T) -> Result<Self, LedgerError> {
        let fees = config.fee_parameters()?;
        info!(
            "[pb-04] Ledger created for deposit contract {} (slot {}, fee rate {}, {:?} commitments)",
            to_hex_prefixed(&config.deposit_contract),
            config.deposits_slot,
            fees.mint_fee_rate,
            config.commitment_scheme
        );
        Ok(Self {
            oracle,
            token,
            deposit_contract: config.deposit_contract,
            deposits_slot: U256::from(config.deposits_slot),
            fees,
            scheme: config.commitment_scheme,
            storage_roots: HashMap::new(),
            redeemed: HashSet::new(),
            events: Vec::new(),
        })
    }

    /// State-root source.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Mutable state-root source, for relaying.
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// Wrapped token.
    pub fn token(&self) -> &T {
        &self.token
    }

    /// Mutable wrapped token.
    pub fn token_mut(&mut self) -> &mut T {
        &mut self.token
    }

    /// Fee parameters.
    pub fn fees(&self) -> &FeeParameters {
        &self.fees
    }

    /// Proved deposit contract.
    pub fn deposit_contract(&self) -> Address {
        self.deposit_contract
    }

    /// Stored storage root for a block, as a record.
    pub fn storage_root_record(&self, block_number: BlockNumber) -> Option<StorageRootRecord> {
        self.storage_roots
            .get(&block_number)
            .map(|storage_root| StorageRootRecord {
                block_number,
                storage_root: *storage_root,
            })
    }

    /// Mint a claim.
    pub fn redeem(&mut self, claim: &DepositClaim) -> Result<MintReceipt, LedgerError> {
        self.mint(
            claim.index,
            claim.recipient,
            claim.amount,
            claim.block_number,
            &claim.proof,
        )
    }

    /// Take all recorded events.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Proved slot value of deposit `index`; an absent slot reads as zero.
    fn prove_deposit(
        &self,
        storage_root: &Hash,
        index: DepositIndex,
        storage_proof: &[u8],
    ) -> Result<U256, LedgerError> {
        let proof = decode_proof(storage_proof).map_err(ProofError::from)?;
        let slot = mapping_slot(U256::from(index), self.deposits_slot);
        match verify_storage_value(storage_root, &slot, &proof) {
            Ok(value) => Ok(value),
            Err(ProofError::KeyNotFound) => Ok(U256::zero()),
            Err(e) => Err(e.into()),
        }
    }
}

impl<O: StateRootProvider, T: WrappedToken> DepositLedgerApi for DepositLedger<O, T> {
    fn update_deposit_contract_storage_root(
        &mut self,
        block_number: BlockNumber,
        account_proof: &[u8],
    ) -> Result<Hash, LedgerError> {
        let state_root = self
            .oracle
            .state_root(block_number)
            .ok_or(LedgerError::UnknownStateRoot(block_number))?;

        if self.storage_roots.contains_key(&block_number) {
            return Err(LedgerError::DuplicateStorageRoot(block_number));
        }

        let proof = decode_proof(account_proof).map_err(ProofError::from)?;
        let account = verify_account(&state_root, &self.deposit_contract, &proof)?;
        debug!(
            block_number,
            nonce = account.nonce,
            "[pb-04] Deposit contract account proved"
        );

        self.storage_roots.insert(block_number, account.storage_root);
        self.events.push(LedgerEvent::StorageRootUpdated {
            block_number,
            storage_root: account.storage_root,
        });
        info!(
            block_number,
            storage_root = %to_hex_prefixed(&account.storage_root),
            "[pb-04] Storage root updated"
        );

        Ok(account.storage_root)
    }

    fn mint(
        &mut self,
        index: DepositIndex,
        recipient: Address,
        claimed_amount: U256,
        block_number: BlockNumber,
        storage_proof: &[u8],
    ) -> Result<MintReceipt, LedgerError> {
        let storage_root = self
            .storage_roots
            .get(&block_number)
            .copied()
            .ok_or(LedgerError::UnknownStorageRoot(block_number))?;

        if self.redeemed.contains(&index) {
            return Err(LedgerError::AlreadyRedeemed(index));
        }

        let proved = self.prove_deposit(&storage_root, index, storage_proof)?;
        let amount = self
            .scheme
            .resolve(index, proved, &recipient, claimed_amount)?;
        let (net_amount, fee) = self.fees.split(amount);

        // Mark first: the token must never observe an unmarked deposit
        self.redeemed.insert(index);

        let mut credits = vec![Credit::new(recipient, net_amount)];
        if !fee.is_zero() {
            credits.push(Credit::new(self.fees.fee_recipient, fee));
        }
        if let Err(e) = self.token.mint_batch(&credits) {
            self.redeemed.remove(&index);
            warn!(index, error = %e, "[pb-04] Token mint failed, redemption reverted");
            return Err(e.into());
        }

        self.events.push(LedgerEvent::DepositRedeemed {
            index,
            recipient,
            net_amount,
            fee,
            block_number,
        });
        info!(
            index,
            block_number,
            amount = %amount,
            fee = %fee,
            recipient = %to_hex_prefixed(&recipient),
            "[pb-04] Deposit redeemed"
        );

        Ok(MintReceipt {
            index,
            recipient,
            amount,
            net_amount,
            fee,
        })
    }

    fn deposit_contract_storage_root(&self, block_number: BlockNumber) -> Option<Hash> {
        self.storage_roots.get(&block_number).copied()
    }

    fn is_redeemed(&self, index: DepositIndex) -> bool {
        self.redeemed.contains(&index)
    }
}
