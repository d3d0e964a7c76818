//! Brute-force reference for cross-checking.
//!
//! Enumerates every index subset of the shorter input, keeps those that are
//! subsequences of the longer one, and returns the longest. Cost is `2^k` for
//! a shorter input of length `k`, so this is only suitable for small inputs.
//! Nothing in the DP core depends on this module.

use std::hash::Hash;

use crate::error::{LcsError, LcsResult};
use crate::tree::LcsSet;

/// Largest shorter-input length the oracle accepts.
pub const MAX_ORACLE_LEN: usize = 24;

/// True if `needle` occurs in `haystack` in order, gaps allowed.
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|tok| rest.any(|h| h == tok))
}

/// All distinct longest common subsequences of `a` and `b`, by enumeration.
///
/// Returns `{[]}` when the inputs share no token, matching
/// [`compute_all_lcs`](crate::compute_all_lcs).
pub fn brute_force_all_lcs<T: Clone + Eq + Hash>(a: &[T], b: &[T]) -> LcsResult<LcsSet<T>> {
    let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };
    if short.len() > MAX_ORACLE_LEN {
        return Err(LcsError::OracleInputTooLong {
            len: short.len(),
            max: MAX_ORACLE_LEN,
        });
    }

    let mut best: LcsSet<T> = LcsSet::default();
    let mut best_len = 0usize;

    for mask in 1u32..(1u32 << short.len()) {
        let size = mask.count_ones() as usize;
        if size < best_len {
            continue;
        }
        let candidate: Vec<T> = short
            .iter()
            .enumerate()
            .filter(|(idx, _)| mask & (1 << idx) != 0)
            .map(|(_, tok)| tok.clone())
            .collect();
        if !is_subsequence(&candidate, long) {
            continue;
        }
        if size > best_len {
            best.clear();
            best_len = size;
        }
        best.insert(candidate);
    }

    if best.is_empty() {
        best.insert(Vec::new());
    }
    Ok(best)
}
