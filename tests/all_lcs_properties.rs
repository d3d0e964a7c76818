use lcs_all::{
    backtrack, backtrack_one, compute_all_lcs, count_alignments, lcs_length,
    oracle::is_subsequence, LcsSet, LcsTable,
};
use proptest::prelude::*;

fn run(s: &[u8], t: &[u8]) -> (u32, LcsSet<u8>) {
    let table = LcsTable::build(s, t);
    (table.lcs_len(), compute_all_lcs(s, t))
}

proptest! {
    #[test]
    fn members_are_common_and_maximal(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let (len, set) = run(s, t);
        for seq in &set {
            prop_assert!(is_subsequence(seq, s));
            prop_assert!(is_subsequence(seq, t));
            prop_assert_eq!(seq.len() as u32, len);
        }
    }

    #[test]
    fn never_empty(a in "[ABC]{0,10}", b in "[ABC]{0,10}") {
        let (len, set) = run(a.as_bytes(), b.as_bytes());
        prop_assert!(!set.is_empty());
        if len == 0 {
            prop_assert_eq!(set.len(), 1);
            prop_assert!(set.contains(&Vec::new()));
        }
    }

    #[test]
    fn symmetric(a in "[ABC]{0,10}", b in "[ABC]{0,10}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(compute_all_lcs(s, t), compute_all_lcs(t, s));
    }

    #[test]
    fn identity(a in "[ACGT]{0,16}") {
        let s = a.as_bytes();
        let set = compute_all_lcs(s, s);
        prop_assert_eq!(set.len(), 1);
        prop_assert!(set.contains(&s.to_vec()));
    }

    #[test]
    fn walks_cover_set_and_count_matches(a in "[AB]{0,9}", b in "[AB]{0,9}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let table = LcsTable::build(s, t);
        let tree = backtrack(&table, s, t, s.len(), t.len());
        let walks: Vec<Vec<u8>> = tree.paths().collect();
        prop_assert_eq!(walks.len(), tree.path_count());
        prop_assert_eq!(count_alignments(&table, s, t), tree.path_count());
        let set: LcsSet<u8> = walks.iter().cloned().collect();
        prop_assert!(walks.len() >= set.len());
        prop_assert_eq!(set, compute_all_lcs(s, t));
    }

    #[test]
    fn single_walk_is_member(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let table = LcsTable::build(s, t);
        let one = backtrack_one(&table, s, t);
        prop_assert!(compute_all_lcs(s, t).contains(&one));
    }

    #[test]
    fn rolling_length_matches_table(a in "[ACGT]{0,20}", b in "[ACGT]{0,20}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(lcs_length(s, t), LcsTable::build(s, t).lcs_len());
    }
}
