#![cfg(feature = "parallel")]

use lcs_all::{compute_all_lcs, compute_all_lcs_batch};
use proptest::prelude::*;

proptest! {
    #[test]
    fn batch_matches_sequential(
        pairs in proptest::collection::vec(("[ABC]{0,8}", "[ABC]{0,8}"), 0..16)
    ) {
        let slices: Vec<(&[u8], &[u8])> = pairs
            .iter()
            .map(|(a, b)| (a.as_bytes(), b.as_bytes()))
            .collect();
        let batch = compute_all_lcs_batch(&slices);
        prop_assert_eq!(batch.len(), slices.len());
        for (got, &(s, t)) in batch.iter().zip(&slices) {
            prop_assert_eq!(got, &compute_all_lcs(s, t));
        }
    }
}
