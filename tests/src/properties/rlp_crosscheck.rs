//! # RLP Cross-Check
//!
//! The hand-written codec against the `rlp` crate.

#[cfg(test)]
mod tests {
    use pb_01_rlp::{decode, decode_u64, encode, encode_bytes, encode_u64, RlpItem};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rlp::{Rlp, RlpStream};

    fn reference_encode(item: &RlpItem) -> Vec<u8> {
        match item {
            RlpItem::Bytes(bytes) => rlp::encode(bytes).to_vec(),
            RlpItem::List(items) => {
                let mut stream = RlpStream::new_list(items.len());
                for item in items {
                    stream.append_raw(&reference_encode(item), 1);
                }
                stream.out().to_vec()
            }
        }
    }

    fn reference_decode(rlp: &Rlp<'_>) -> RlpItem {
        if rlp.is_list() {
            RlpItem::List(rlp.iter().map(|child| reference_decode(&child)).collect())
        } else {
            RlpItem::Bytes(rlp.data().unwrap().to_vec())
        }
    }

    fn random_bytes(rng: &mut StdRng) -> Vec<u8> {
        // Bias toward the short/long form boundaries
        let len = match rng.gen_range(0..4) {
            0 => rng.gen_range(0..2),
            1 => rng.gen_range(54..58),
            _ => rng.gen_range(0..300),
        };
        (0..len).map(|_| rng.gen()).collect()
    }

    fn random_item(rng: &mut StdRng, depth: usize) -> RlpItem {
        if depth == 0 || rng.gen_bool(0.6) {
            RlpItem::Bytes(random_bytes(rng))
        } else {
            let len = rng.gen_range(0..6);
            RlpItem::List((0..len).map(|_| random_item(rng, depth - 1)).collect())
        }
    }

    #[test]
    fn test_byte_strings_match_reference() {
        let mut rng = StdRng::seed_from_u64(0xb1);
        for _ in 0..500 {
            let bytes = random_bytes(&mut rng);
            let ours = encode_bytes(&bytes);
            assert_eq!(ours, rlp::encode(&bytes).to_vec());
            assert_eq!(decode(&ours).unwrap(), RlpItem::Bytes(bytes));
        }
    }

    #[test]
    fn test_integers_match_reference() {
        let mut rng = StdRng::seed_from_u64(0xb2);
        let edges = [0u64, 1, 0x7f, 0x80, 0xff, 0x100, u64::MAX];
        let random: Vec<u64> = (0..500)
            .map(|_| rng.gen::<u64>() >> rng.gen_range(0..64u32))
            .collect();
        for value in edges.iter().chain(random.iter()) {
            let ours = encode_u64(*value);
            assert_eq!(ours, rlp::encode(value).to_vec(), "value {value}");
            assert_eq!(decode_u64(&decode(&ours).unwrap()).unwrap(), *value);
            assert_eq!(Rlp::new(&ours).as_val::<u64>().unwrap(), *value);
        }
    }

    #[test]
    fn test_nested_items_match_reference() {
        let mut rng = StdRng::seed_from_u64(0xb3);
        for _ in 0..300 {
            let item = random_item(&mut rng, 4);
            let ours = encode(&item);
            let reference = reference_encode(&item);
            assert_eq!(ours, reference);
            assert_eq!(reference_decode(&Rlp::new(&ours)), item);
            assert_eq!(decode(&reference).unwrap(), item);
        }
    }

    #[test]
    fn test_accepted_inputs_are_canonical() {
        // Whatever the strict decoder accepts must re-encode to the same bytes
        let mut rng = StdRng::seed_from_u64(0xb4);
        let mut accepted = 0;
        for _ in 0..20_000 {
            let len = rng.gen_range(1..8);
            let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            if let Ok(item) = decode(&input) {
                accepted += 1;
                assert_eq!(reference_encode(&item), input, "input {input:02x?}");
            }
        }
        assert!(accepted > 0);
    }
}
