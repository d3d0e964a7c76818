//! All Longest Common Subsequences (LCS)
//!
//! The textbook LCS algorithm returns one answer. This crate returns *every*
//! distinct maximum-length common subsequence of two token sequences.
//!
//! ## Core idea
//! 1. Fill the classic `(m + 1) × (n + 1)` length table ([`LcsTable`]).
//! 2. Backtrack from the bottom-right cell into an [`AlignmentTree`], keeping
//!    both directions whenever they tie.
//! 3. Flatten the tree's root-to-leaf walks and deduplicate them.
//!
//! The number of answers can grow exponentially with input length. Use
//! [`LcsEngineBuilder::max_alignments`] to refuse such inputs before the tree
//! is built. [`count_alignments`] gives the walk count from the table alone.
//!
//! ## Quick start
//! ```
//! use lcs_all::compute_all_lcs;
//!
//! let set = compute_all_lcs(b"ABCBDAB", b"BDCABA");
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&b"BCBA".to_vec()));
//! assert!(set.contains(&b"BDAB".to_vec()));
//! assert!(set.contains(&b"BCAB".to_vec()));
//! ```
//!
//! If either input is empty, or the inputs share no token, the result is the
//! set holding only the empty sequence.
//!
//! The [`oracle`] module holds a brute-force implementation used to
//! cross-check the DP on small inputs.

pub mod backtrack;
pub mod builder;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod table;
pub mod tree;

use std::hash::Hash;

pub use crate::backtrack::{backtrack, backtrack_one, count_alignments, flatten};
pub use crate::builder::LcsEngineBuilder;
pub use crate::engine::{compute_all_lcs_batch, LcsEngine, LcsReport};
pub use crate::error::{LcsError, LcsResult};
pub use crate::table::{lcs_length, LcsTable};
pub use crate::tree::{AlignmentNode, AlignmentTree, LcsSet, NodeId};

/// Build the LCS length table of `source` against `target`.
pub fn compute_lcs_length_table<T: PartialEq>(source: &[T], target: &[T]) -> LcsTable {
    LcsTable::build(source, target)
}

/// Every distinct longest common subsequence of `source` and `target`.
///
/// Total over any pair of finite sequences and never empty.
pub fn compute_all_lcs<T: Clone + Eq + Hash>(source: &[T], target: &[T]) -> LcsSet<T> {
    let table = LcsTable::build(source, target);
    let tree = backtrack(&table, source, target, source.len(), target.len());
    flatten(&tree)
}
