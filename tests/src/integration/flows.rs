//! # Bridge Flows
//!
//! ```text
//! SourceChain ──seal──→ Block
//!                        │ state root + relayer signature
//!                        ↓
//!                 BridgeService::relay_state_root
//!                        │ account proof
//!                        ↓
//!        update_deposit_contract_storage_root
//!                        │ storage proof
//!                        ↓
//!                      mint ──→ InMemoryWrappedToken
//! ```

#[cfg(test)]
mod tests {
    use crate::common::*;
    use pb_04_deposit_ledger::{
        BridgeEvent, CommitmentScheme, LedgerConfig, LedgerError, LedgerEvent,
        DEFAULT_FEE_RECIPIENT,
    };
    use pb_03_state_oracle::{OracleError, OracleEvent};
    use shared_types::U256;

    const ALICE: [u8; 20] = [0xa1; 20];
    const BOB: [u8; 20] = [0xb0; 20];

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_relay_prove_and_mint_one_unit() {
        let mut chain = SourceChain::new();
        let index = chain.deposit(unit(), ALICE);
        let block = chain.seal(10);
        let bridge = bridge();

        bridge
            .relay_state_root(10, block.state_root(), &block.signature())
            .unwrap();
        let storage_root = bridge
            .update_deposit_contract_storage_root(10, &block.account_blob())
            .unwrap();
        assert_eq!(storage_root, block.storage_root());

        let receipt = bridge
            .mint(index, ALICE, unit(), 10, &block.storage_blob(index))
            .unwrap();

        let fee = U256::exp10(16);
        assert_eq!(receipt.fee, fee);
        assert_eq!(bridge.balance_of(&ALICE), U256::from(990_000_000_000_000_000u128));
        assert_eq!(bridge.balance_of(&DEFAULT_FEE_RECIPIENT), fee);
        assert_eq!(bridge.total_supply(), unit());

        assert_eq!(
            bridge.mint(index, ALICE, unit(), 10, &block.storage_blob(index)),
            Err(LedgerError::AlreadyRedeemed(index))
        );
        assert_eq!(bridge.total_supply(), unit());
    }

    #[test]
    fn test_many_deposits_one_block() {
        let mut chain = SourceChain::new();
        let amounts: Vec<U256> = (1..=12u64).map(|i| U256::from(i * 1_000)).collect();
        for (i, amount) in amounts.iter().enumerate() {
            chain.deposit(*amount, if i % 2 == 0 { ALICE } else { BOB });
        }
        let block = chain.seal(20);
        let bridge = bridge_with(LedgerConfig::for_contract(DEPOSIT_CONTRACT).with_mint_fee_rate(0));

        bridge
            .relay_state_root(20, block.state_root(), &block.signature())
            .unwrap();
        bridge
            .update_deposit_contract_storage_root(20, &block.account_blob())
            .unwrap();

        // Redeem in reverse order
        for (i, amount) in amounts.iter().enumerate().rev() {
            let recipient = if i % 2 == 0 { ALICE } else { BOB };
            bridge
                .mint(i as u64, recipient, *amount, 20, &block.storage_blob(i as u64))
                .unwrap();
        }

        let total: U256 = amounts.iter().fold(U256::zero(), |acc, a| acc + *a);
        assert_eq!(bridge.total_supply(), total);
        assert_eq!(
            bridge.balance_of(&ALICE) + bridge.balance_of(&BOB),
            total
        );
    }

    #[test]
    fn test_deposit_appears_in_later_block() {
        let mut chain = SourceChain::new();
        chain.deposit(unit(), ALICE);
        let early = chain.seal(10);
        let late_index = chain.deposit(unit() * 2, BOB);
        let late = chain.seal(12);
        let bridge = bridge();

        // Relays may arrive out of order
        bridge
            .relay_state_root(12, late.state_root(), &late.signature())
            .unwrap();
        bridge
            .relay_state_root(10, early.state_root(), &early.signature())
            .unwrap();
        bridge
            .update_deposit_contract_storage_root(10, &early.account_blob())
            .unwrap();
        bridge
            .update_deposit_contract_storage_root(12, &late.account_blob())
            .unwrap();

        assert_eq!(
            bridge.mint(late_index, BOB, unit() * 2, 10, &early.storage_blob(late_index)),
            Err(LedgerError::EmptyDeposit(late_index))
        );
        assert!(!bridge.is_redeemed(late_index));
        bridge
            .mint(late_index, BOB, unit() * 2, 12, &late.storage_blob(late_index))
            .unwrap();
        assert!(bridge.is_redeemed(late_index));
    }

    #[test]
    fn test_amount_scheme_flow() {
        let mut chain = SourceChain::new();
        let index = chain.write_slot(U256::from(5_000u64));
        let block = chain.seal(3);
        let bridge = bridge_with(
            LedgerConfig::for_contract(DEPOSIT_CONTRACT)
                .with_commitment_scheme(CommitmentScheme::Amount),
        );

        bridge
            .relay_state_root(3, block.state_root(), &block.signature())
            .unwrap();
        bridge
            .update_deposit_contract_storage_root(3, &block.account_blob())
            .unwrap();
        let receipt = bridge
            .mint(index, ALICE, U256::zero(), 3, &block.storage_blob(index))
            .unwrap();
        assert_eq!(receipt.amount, U256::from(5_000u64));
        assert_eq!(receipt.fee, U256::from(50u64));
        assert_eq!(bridge.balance_of(&ALICE), U256::from(4_950u64));
    }

    // =============================================================================
    // ORDERING
    // =============================================================================

    #[test]
    fn test_storage_root_requires_state_root() {
        let mut chain = SourceChain::new();
        chain.deposit(unit(), ALICE);
        let block = chain.seal(10);
        let bridge = bridge();

        assert_eq!(
            bridge.update_deposit_contract_storage_root(10, &block.account_blob()),
            Err(LedgerError::UnknownStateRoot(10))
        );
    }

    #[test]
    fn test_mint_requires_storage_root() {
        let mut chain = SourceChain::new();
        let index = chain.deposit(unit(), ALICE);
        let block = chain.seal(10);
        let bridge = bridge();
        bridge
            .relay_state_root(10, block.state_root(), &block.signature())
            .unwrap();

        assert_eq!(
            bridge.mint(index, ALICE, unit(), 10, &block.storage_blob(index)),
            Err(LedgerError::UnknownStorageRoot(10))
        );
    }

    #[test]
    fn test_records_are_immutable() {
        let mut chain = SourceChain::new();
        chain.deposit(unit(), ALICE);
        let block = chain.seal(10);
        let bridge = bridge();
        bridge
            .relay_state_root(10, block.state_root(), &block.signature())
            .unwrap();
        bridge
            .update_deposit_contract_storage_root(10, &block.account_blob())
            .unwrap();

        chain.deposit(unit(), BOB);
        let other = chain.seal(10);
        assert_ne!(other.state_root(), block.state_root());
        assert_eq!(
            bridge.relay_state_root(10, block.state_root(), &block.signature()),
            Err(LedgerError::Oracle(OracleError::DuplicateBlock(10)))
        );
        assert!(bridge
            .relay_state_root(10, other.state_root(), &other.signature())
            .is_err());
        assert_eq!(
            bridge.update_deposit_contract_storage_root(10, &block.account_blob()),
            Err(LedgerError::DuplicateStorageRoot(10))
        );
        assert_eq!(bridge.state_root(10), Some(block.state_root()));
        assert_eq!(bridge.storage_root(10), Some(block.storage_root()));
    }

    // =============================================================================
    // EVENTS
    // =============================================================================

    #[test]
    fn test_events_in_order() {
        let mut chain = SourceChain::new();
        let index = chain.deposit(unit(), ALICE);
        let block = chain.seal(10);
        let bridge = bridge();

        bridge
            .relay_state_root(10, block.state_root(), &block.signature())
            .unwrap();
        bridge
            .update_deposit_contract_storage_root(10, &block.account_blob())
            .unwrap();
        bridge
            .mint(index, ALICE, unit(), 10, &block.storage_blob(index))
            .unwrap();

        let events = bridge.drain_events();
        assert_eq!(
            events,
            vec![
                BridgeEvent::Oracle(OracleEvent::StateRootRelayed {
                    block_number: 10,
                    state_root: block.state_root(),
                    relayer: relayer().address(),
                }),
                BridgeEvent::Ledger(LedgerEvent::StorageRootUpdated {
                    block_number: 10,
                    storage_root: block.storage_root(),
                }),
                BridgeEvent::Ledger(LedgerEvent::DepositRedeemed {
                    index,
                    recipient: ALICE,
                    net_amount: U256::from(990_000_000_000_000_000u128),
                    fee: U256::exp10(16),
                    block_number: 10,
                }),
            ]
        );

        let json = serde_json::to_value(&events[2]).unwrap();
        assert_eq!(json["type"], "DepositRedeemed");
        assert_eq!(json["index"], 0);
    }
}
