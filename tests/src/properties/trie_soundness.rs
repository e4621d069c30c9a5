//! # Trie Proof Soundness
//!
//! For random tries: every present key proves its value, every absent key
//! proves absence, and any tampering with a proof (flipped bytes, dropped,
//! added or reordered entries) is rejected.

#[cfg(test)]
mod tests {
    use pb_02_trie_proof::fixture::FixtureTrie;
    use pb_02_trie_proof::{verify_proof, InvalidProof, ProofError};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeMap;

    fn random_trie(rng: &mut StdRng, keys: usize, key_len: usize) -> BTreeMap<Vec<u8>, Vec<u8>> {
        let mut entries = BTreeMap::new();
        while entries.len() < keys {
            let key: Vec<u8> = (0..key_len).map(|_| rng.gen()).collect();
            let value_len = rng.gen_range(1..70);
            let value: Vec<u8> = (0..value_len).map(|_| rng.gen()).collect();
            entries.insert(key, value);
        }
        entries
    }

    fn build(entries: &BTreeMap<Vec<u8>, Vec<u8>>) -> FixtureTrie {
        let mut trie = FixtureTrie::new();
        for (key, value) in entries {
            trie.insert(key.clone(), value.clone());
        }
        trie
    }

    /// Secure-trie shaped keys and short keys (dense prefixes, inline nodes).
    fn shapes() -> [(usize, usize); 4] {
        [(1, 32), (50, 32), (200, 32), (120, 2)]
    }

    #[test]
    fn test_present_keys_prove_their_values() {
        let mut rng = StdRng::seed_from_u64(0x701);
        for (count, key_len) in shapes() {
            let entries = random_trie(&mut rng, count, key_len);
            let trie = build(&entries);
            let root = trie.root();
            for (key, value) in &entries {
                assert_eq!(
                    verify_proof(&root, key, &trie.proof(key)).as_ref(),
                    Ok(value),
                    "key {key:02x?}"
                );
            }
        }
    }

    #[test]
    fn test_absent_keys_prove_absence() {
        let mut rng = StdRng::seed_from_u64(0x702);
        for (count, key_len) in shapes() {
            let entries = random_trie(&mut rng, count, key_len);
            let trie = build(&entries);
            let root = trie.root();
            for _ in 0..100 {
                let key: Vec<u8> = (0..key_len).map(|_| rng.gen()).collect();
                if entries.contains_key(&key) {
                    continue;
                }
                assert_eq!(
                    verify_proof(&root, &key, &trie.proof(&key)),
                    Err(ProofError::KeyNotFound)
                );
            }
        }
    }

    #[test]
    fn test_any_flipped_byte_is_detected() {
        let mut rng = StdRng::seed_from_u64(0x703);
        let entries = random_trie(&mut rng, 80, 32);
        let trie = build(&entries);
        let root = trie.root();
        let keys: Vec<_> = entries.keys().cloned().collect();

        for _ in 0..300 {
            let key = keys.choose(&mut rng).unwrap();
            let mut proof = trie.proof(key);
            let entry = rng.gen_range(0..proof.len());
            let byte = rng.gen_range(0..proof[entry].len());
            proof[entry][byte] ^= 1 << rng.gen_range(0..8);

            match verify_proof(&root, key, &proof) {
                Err(ProofError::HashMismatch { index, .. }) => assert_eq!(index, entry),
                other => panic!("tampered proof accepted or misreported: {other:?}"),
            }
        }
    }

    #[test]
    fn test_truncated_and_extended_proofs() {
        let mut rng = StdRng::seed_from_u64(0x704);
        let entries = random_trie(&mut rng, 100, 32);
        let trie = build(&entries);
        let root = trie.root();

        for key in entries.keys().take(30) {
            let proof = trie.proof(key);

            let mut truncated = proof.clone();
            truncated.pop();
            assert_eq!(
                verify_proof(&root, key, &truncated),
                Err(ProofError::ProofInvalid(InvalidProof::Exhausted))
            );

            let mut extended = proof.clone();
            extended.push(proof[0].clone());
            assert_eq!(
                verify_proof(&root, key, &extended),
                Err(ProofError::ProofInvalid(InvalidProof::TrailingEntries(1)))
            );
        }
    }

    #[test]
    fn test_reordered_proof_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0x706);
        let entries = random_trie(&mut rng, 200, 32);
        let trie = build(&entries);
        let root = trie.root();

        for key in entries.keys() {
            let proof = trie.proof(key);
            for a in 0..proof.len() {
                for b in a + 1..proof.len() {
                    let mut swapped = proof.clone();
                    swapped.swap(a, b);
                    match verify_proof(&root, key, &swapped) {
                        Err(ProofError::HashMismatch { index, .. }) => assert_eq!(index, a),
                        other => panic!("reordered proof accepted or misreported: {other:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_proof_does_not_transfer_between_tries() {
        let mut rng = StdRng::seed_from_u64(0x705);
        let honest = random_trie(&mut rng, 60, 32);
        let honest_trie = build(&honest);

        // Same keys, one value changed
        let mut forged = honest.clone();
        let target = forged.keys().next().unwrap().clone();
        forged.insert(target.clone(), b"forged".to_vec());
        let forged_trie = build(&forged);

        assert!(matches!(
            verify_proof(&honest_trie.root(), &target, &forged_trie.proof(&target)),
            Err(ProofError::HashMismatch { index: 0, .. })
        ));
    }
}
