//! Property-style coverage over random `(key, iv, dir, len)` inputs:
//! determinism, prefix stability, and the XOR involution.

use gea_core::{gea1, gea2, GeaInput};
use proptest::prelude::*;

fn arb_input() -> impl Strategy<Value = GeaInput> {
    (
        any::<[u8; 4]>(),
        any::<bool>(),
        any::<[u8; 8]>(),
    )
        .prop_map(|(iv, dir, key)| GeaInput::new(iv, u8::from(dir), key))
}

proptest! {
    #[test]
    fn gea1_is_deterministic(input in arb_input(), len in 0usize..64) {
        let mut a = vec![0u8; len];
        let mut b = vec![0u8; len];
        gea1(&input, &mut a);
        gea1(&input, &mut b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn gea2_is_deterministic(input in arb_input(), len in 0usize..64) {
        let mut a = vec![0u8; len];
        let mut b = vec![0u8; len];
        gea2(&input, &mut a);
        gea2(&input, &mut b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn gea1_prefix_stability(input in arb_input(), l1 in 0usize..32, extra in 0usize..32) {
        let l2 = l1 + extra;
        let mut short = vec![0u8; l1];
        let mut long = vec![0u8; l2];
        gea1(&input, &mut short);
        gea1(&input, &mut long);
        prop_assert_eq!(&long[..l1], &short[..]);
    }

    #[test]
    fn gea2_prefix_stability(input in arb_input(), l1 in 0usize..32, extra in 0usize..32) {
        let l2 = l1 + extra;
        let mut short = vec![0u8; l1];
        let mut long = vec![0u8; l2];
        gea2(&input, &mut short);
        gea2(&input, &mut long);
        prop_assert_eq!(&long[..l1], &short[..]);
    }

    #[test]
    fn gea1_encryption_is_an_involution(input in arb_input(), plaintext in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut ks = vec![0u8; plaintext.len()];
        gea1(&input, &mut ks);

        let ciphertext: Vec<u8> = plaintext.iter().zip(&ks).map(|(p, k)| p ^ k).collect();
        let recovered: Vec<u8> = ciphertext.iter().zip(&ks).map(|(c, k)| c ^ k).collect();
        prop_assert_eq!(recovered, plaintext);
    }

    #[test]
    fn gea2_encryption_is_an_involution(input in arb_input(), plaintext in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut ks = vec![0u8; plaintext.len()];
        gea2(&input, &mut ks);

        let ciphertext: Vec<u8> = plaintext.iter().zip(&ks).map(|(p, k)| p ^ k).collect();
        let recovered: Vec<u8> = ciphertext.iter().zip(&ks).map(|(c, k)| c ^ k).collect();
        prop_assert_eq!(recovered, plaintext);
    }
}
