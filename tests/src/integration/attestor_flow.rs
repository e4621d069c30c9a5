//! # Attestor → Oracle → Ledger
//!
//! The off-chain attestor signs what it sees on the source chain; the JSON
//! response is decoded and relayed as-is.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use pb_03_state_oracle::{
        ChainRegistry, Environment, InMemoryChainHead, OracleError, OracleResponse,
        StateRootAttestor, ETH_POW_MAINNET,
    };
    use pb_04_deposit_ledger::LedgerError;
    use shared_types::U256;

    const CAROL: [u8; 20] = [0xca; 20];

    fn production_pow_confirmations() -> u64 {
        ChainRegistry::for_environment(Environment::Production)
            .get(ETH_POW_MAINNET)
            .unwrap()
            .confirmations
    }

    #[tokio::test]
    async fn test_attested_root_redeems_deposit() {
        let mut chain = SourceChain::new();
        let index = chain.deposit(unit() * 3, CAROL);
        let block = chain.seal(100);

        let confirmations = production_pow_confirmations();
        let head = InMemoryChainHead::new(CHAIN_ID).with_block(100, block.state_root());
        head.set_latest(100 + confirmations);
        let attestor = StateRootAttestor::new(head, relayer(), confirmations);

        let json = attestor.attest(100).await.unwrap().to_json().unwrap();
        let response: OracleResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.block_number, "100");
        assert_eq!(response.confirmations, confirmations);

        let (_, signature) = response.decode_envelope().unwrap();
        let message = shared_types::parse_hex_bytes(&response.envelope.message).unwrap();
        let bridge = bridge();
        let record = bridge.relay_signed_message(&message, &signature).unwrap();
        assert_eq!(record.state_root, block.state_root());

        bridge
            .update_deposit_contract_storage_root(100, &block.account_blob())
            .unwrap();
        bridge
            .mint(index, CAROL, unit() * 3, 100, &block.storage_blob(index))
            .unwrap();
        assert_eq!(bridge.total_supply(), unit() * 3);
    }

    #[tokio::test]
    async fn test_unconfirmed_block_is_not_signed() {
        let mut chain = SourceChain::new();
        let block = chain.seal(100);
        let confirmations = production_pow_confirmations();
        let head = InMemoryChainHead::new(CHAIN_ID).with_block(100, block.state_root());
        head.set_latest(100 + confirmations - 1);
        let attestor = StateRootAttestor::new(head, relayer(), confirmations);

        assert!(matches!(
            attestor.attest(100).await,
            Err(OracleError::InsufficientConfirmations { .. })
        ));
    }

    #[tokio::test]
    async fn test_attestation_for_other_chain_rejected() {
        let mut chain = SourceChain::new();
        let block = chain.seal(7);
        let head = InMemoryChainHead::new(61).with_block(7, block.state_root());
        head.set_latest(50);
        let attestor = StateRootAttestor::new(head, relayer(), 10);

        let response = attestor.attest(7).await.unwrap();
        let (_, signature) = response.decode_envelope().unwrap();
        let message = shared_types::parse_hex_bytes(&response.envelope.message).unwrap();

        assert_eq!(
            bridge().relay_signed_message(&message, &signature),
            Err(LedgerError::Oracle(OracleError::ChainIdMismatch {
                expected: CHAIN_ID,
                actual: 61,
            }))
        );
    }

    #[tokio::test]
    async fn test_foreign_attestor_rejected() {
        let mut chain = SourceChain::new();
        let block = chain.seal(7);
        let head = InMemoryChainHead::new(CHAIN_ID).with_block(7, block.state_root());
        head.set_latest(50);
        let foreign = shared_crypto::RelayerKeyPair::from_bytes(&[0x24; 32]).unwrap();
        let attestor = StateRootAttestor::new(head, foreign, 10);

        let response = attestor.attest(7).await.unwrap();
        let (attestation, signature) = response.decode_envelope().unwrap();
        let bridge = bridge();
        assert!(matches!(
            bridge.relay_state_root(attestation.block_number, attestation.state_root, &signature),
            Err(LedgerError::Oracle(OracleError::UnauthorizedRelayer { .. }))
        ));
        assert_eq!(bridge.state_root(7), None);
        assert_eq!(bridge.total_supply(), U256::zero());
    }
}
