//! Example: every longest common subsequence of the demo pairs.
//!
//! Run with:
//! `cargo run --example all_lcs_demo`

use lcs_all::{backtrack_one, compute_all_lcs, LcsTable};

fn main() {
    let examples = [("ABCBDAB", "BDCABA"), ("ABDEDA", "ADEBADDA")];

    for (s, t) in examples {
        let source: Vec<char> = s.chars().collect();
        let target: Vec<char> = t.chars().collect();

        let table = LcsTable::build(&source, &target);
        let one: String = backtrack_one(&table, &source, &target)
            .into_iter()
            .collect();

        let mut all: Vec<String> = compute_all_lcs(&source, &target)
            .into_iter()
            .map(|seq| seq.into_iter().collect())
            .collect();
        all.sort();

        println!("LCS between {s} and {t} (length {}):", table.lcs_len());
        println!("  one: {one}");
        println!("  all: {all:?}");
    }

    // Tokens need not be characters.
    let old = ["let", "x", "=", "1", ";"];
    let new = ["let", "mut", "x", "=", "2", ";"];
    for seq in compute_all_lcs(&old, &new) {
        println!("word-level LCS: {}", seq.join(" "));
    }
}
