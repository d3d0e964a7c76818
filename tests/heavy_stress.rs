#![cfg(feature = "heavy")]
use lcs_all::{backtrack, backtrack_one, lcs_length, LcsTable};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_table_and_single_walk() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 5_000);
    let t = random_dna(&mut rng, 5_000);
    let table = LcsTable::build(&s, &t);
    assert_eq!(table.lcs_len(), lcs_length(&s, &t));
    let one = backtrack_one(&table, &s, &t);
    assert_eq!(one.len() as u32, table.lcs_len());
}

#[test]
fn heavy_stress_deep_tree_without_ties() {
    // Every cell above the match prefers the source-skip direction: one chain.
    let mut s = vec![b'A'];
    s.extend(std::iter::repeat(b'B').take(200_000));
    let t = b"A";
    let table = LcsTable::build(&s, t);
    let tree = backtrack(&table, &s, t, s.len(), t.len());
    assert_eq!(tree.len(), s.len() + 1);
    assert_eq!(tree.path_count(), 1);
    assert_eq!(tree.paths().collect::<Vec<_>>(), vec![b"A".to_vec()]);
}
