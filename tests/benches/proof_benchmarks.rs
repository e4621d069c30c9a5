//! # Bridge Core Benchmarks
//!
//! | Operation | Input |
//! |-----------|-------|
//! | MPT proof verification | secure-trie keys, 10 to 10,000 entries |
//! | Proof blob decoding | account proof blob |
//! | Relayer signature recovery | EIP-191 attestation digest |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pb_02_trie_proof::fixture::FixtureTrie;
use pb_02_trie_proof::{decode_proof, encode_proof, verify_proof};
use pb_03_state_oracle::Attestation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_crypto::{keccak256, recover_address, RelayerKeyPair};
use std::time::Duration;

fn populated_trie(entries: usize) -> (FixtureTrie, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(entries as u64);
    let mut trie = FixtureTrie::new();
    let mut last = Vec::new();
    for i in 0..entries {
        let key = keccak256(&(i as u64).to_be_bytes()).to_vec();
        let value: Vec<u8> = (0..rng.gen_range(1..80)).map(|_| rng.gen()).collect();
        trie.insert(key.clone(), value);
        last = key;
    }
    (trie, last)
}

fn bench_verify_proof(c: &mut Criterion) {
    let mut group = c.benchmark_group("pb-02-verify-proof");
    group.measurement_time(Duration::from_secs(5));

    for entries in [10usize, 100, 1_000, 10_000] {
        let (trie, key) = populated_trie(entries);
        let root = trie.root();
        let proof = trie.proof(&key);
        group.bench_with_input(BenchmarkId::from_parameter(entries), &proof, |b, proof| {
            b.iter(|| verify_proof(black_box(&root), black_box(&key), black_box(proof)))
        });
    }
    group.finish();
}

fn bench_decode_blob(c: &mut Criterion) {
    let (trie, key) = populated_trie(1_000);
    let blob = encode_proof(&trie.proof(&key));
    c.bench_function("pb-02-decode-proof-blob", |b| {
        b.iter(|| decode_proof(black_box(&blob)))
    });
}

fn bench_recover_relayer(c: &mut Criterion) {
    let key = RelayerKeyPair::from_bytes(&[0x42; 32]).expect("valid key");
    let digest = Attestation::new(1, 10, [0xab; 32]).digest();
    let signature = key.sign_prehash(&digest).expect("signing succeeds");
    c.bench_function("pb-03-recover-relayer", |b| {
        b.iter(|| recover_address(black_box(&digest), black_box(&signature)))
    });
}

criterion_group!(
    benches,
    bench_verify_proof,
    bench_decode_blob,
    bench_recover_relayer
);
criterion_main!(benches);
