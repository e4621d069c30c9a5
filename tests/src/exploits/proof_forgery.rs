//! # Proof Forgery
//!
//! Proofs are only as good as the root they are checked against. These
//! attacks build internally consistent proofs from tries the relayed state
//! root never committed to.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use pb_02_trie_proof::fixture::FixtureTrie;
    use pb_02_trie_proof::{
        encode_proof, AccountState, ProofError, EMPTY_CODE_HASH,
    };
    use pb_04_deposit_ledger::{deposit_commitment, LedgerError};
    use shared_types::U256;

    const MALLORY: [u8; 20] = [0x66; 20];

    fn relayed_bridge_at(
        block: &Block,
    ) -> pb_04_deposit_ledger::BridgeService<pb_04_deposit_ledger::InMemoryWrappedToken> {
        let bridge = bridge();
        bridge
            .relay_state_root(block.number, block.state_root(), &block.signature())
            .unwrap();
        bridge
    }

    #[test]
    fn test_fake_storage_trie() {
        let mut chain = SourceChain::new();
        chain.deposit(unit(), [0x11; 20]);
        let block = chain.seal(10);
        let bridge = relayed_bridge_at(&block);
        bridge
            .update_deposit_contract_storage_root(10, &block.account_blob())
            .unwrap();

        // Mallory's own trie claiming a huge deposit at index 0
        let mut fake = FixtureTrie::new();
        let word = U256::from_big_endian(&deposit_commitment(unit() * 1_000_000, &MALLORY));
        fake.insert_storage(&deposit_slot(0), word);
        let blob = encode_proof(&fake.storage_proof(&deposit_slot(0)));

        assert!(matches!(
            bridge.mint(0, MALLORY, unit() * 1_000_000, 10, &blob),
            Err(LedgerError::Proof(ProofError::HashMismatch { index: 0, .. }))
        ));
        assert_eq!(bridge.total_supply(), U256::zero());
    }

    #[test]
    fn test_fake_account_with_fake_storage_root() {
        let mut chain = SourceChain::new();
        let block = chain.seal(10);
        let bridge = relayed_bridge_at(&block);

        let mut fake_state = FixtureTrie::new();
        fake_state.insert_account(
            &DEPOSIT_CONTRACT,
            &AccountState {
                nonce: 1,
                balance: U256::zero(),
                storage_root: [0x66; 32],
                code_hash: EMPTY_CODE_HASH,
            },
        );
        let blob = encode_proof(&fake_state.account_proof(&DEPOSIT_CONTRACT));

        assert!(matches!(
            bridge.update_deposit_contract_storage_root(10, &blob),
            Err(LedgerError::Proof(ProofError::HashMismatch { index: 0, .. }))
        ));
        assert_eq!(bridge.storage_root(10), None);
    }

    #[test]
    fn test_other_contract_account_proof() {
        let mut chain = SourceChain::new();
        let block = chain.seal(10);
        let bridge = relayed_bridge_at(&block);

        // A genuine proof, but for an unrelated account in the same state trie
        let blob = encode_proof(&block.state.account_proof(&[0x03; 20]));
        assert!(matches!(
            bridge.update_deposit_contract_storage_root(10, &blob),
            Err(LedgerError::Proof(_))
        ));
    }

    #[test]
    fn test_proof_for_neighbouring_index() {
        let mut chain = SourceChain::new();
        chain.deposit(unit(), MALLORY);
        chain.deposit(unit(), [0x11; 20]);
        let block = chain.seal(10);
        let bridge = relayed_bridge_at(&block);
        bridge
            .update_deposit_contract_storage_root(10, &block.account_blob())
            .unwrap();

        // Index 0 is Mallory's, index 1 is not
        assert!(matches!(
            bridge.mint(1, MALLORY, unit(), 10, &block.storage_blob(0)),
            Err(LedgerError::Proof(_))
        ));
        assert_eq!(
            bridge.mint(1, MALLORY, unit(), 10, &block.storage_blob(1)),
            Err(LedgerError::CommitmentMismatch(1))
        );
        assert!(!bridge.is_redeemed(1));
    }

    #[test]
    fn test_malformed_blobs() {
        let mut chain = SourceChain::new();
        chain.deposit(unit(), MALLORY);
        let block = chain.seal(10);
        let bridge = relayed_bridge_at(&block);

        for blob in [vec![], vec![0x80], vec![0xc1, 0xc0], vec![0xf8, 0x01, 0x00]] {
            assert!(matches!(
                bridge.update_deposit_contract_storage_root(10, &blob),
                Err(LedgerError::Proof(_))
            ));
        }
        assert_eq!(bridge.storage_root(10), None);
    }
}
