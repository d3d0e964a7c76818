//! Query engine tying table, backtrack and flattening together.
//!
//! An [`LcsEngine`] borrows one pair of inputs plus its configuration and runs
//! the three phases on demand. Each run builds its own table and tree; nothing
//! is shared between runs or between engines.

use std::hash::Hash;

use crate::backtrack::{backtrack, count_alignments};
use crate::error::{LcsError, LcsResult};
use crate::table::{lcs_length, LcsTable};
use crate::tree::LcsSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one all-LCS query.
#[derive(Clone, Debug)]
pub struct LcsReport<T> {
    /// LCS length, `table[m][n]`.
    pub length: u32,
    /// Root-to-leaf walks in the alignment tree, before deduplication.
    pub paths: usize,
    /// Distinct longest common subsequences.
    pub sequences: LcsSet<T>,
}

impl<T: Clone + Ord> LcsReport<T> {
    /// Sequences in lexicographic order, for stable display.
    pub fn sorted(&self) -> Vec<Vec<T>> {
        let mut out: Vec<Vec<T>> = self.sequences.iter().cloned().collect();
        out.sort();
        out
    }
}

/// All-LCS engine for a pair of token sequences.
///
/// ```
/// use lcs_all::LcsEngine;
///
/// let engine = LcsEngine::new(b"ABCBDAB", b"BDCABA");
/// let report = engine.run().unwrap();
/// assert_eq!(report.length, 4);
/// assert_eq!(report.sequences.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct LcsEngine<'a, T> {
    source: &'a [T],
    target: &'a [T],
    max_alignments: Option<usize>,
}

impl<'a, T> LcsEngine<'a, T> {
    /// Engine with no alignment cap.
    pub fn new(source: &'a [T], target: &'a [T]) -> Self {
        Self {
            source,
            target,
            max_alignments: None,
        }
    }

    pub(crate) fn with_max_alignments(
        source: &'a [T],
        target: &'a [T],
        max_alignments: Option<usize>,
    ) -> Self {
        Self {
            source,
            target,
            max_alignments,
        }
    }

    pub fn source(&self) -> &'a [T] {
        self.source
    }

    pub fn target(&self) -> &'a [T] {
        self.target
    }

    /// Configured alignment cap, if any.
    pub fn max_alignments(&self) -> Option<usize> {
        self.max_alignments
    }
}

impl<'a, T: PartialEq> LcsEngine<'a, T> {
    /// Build the full DP table for this pair.
    pub fn table(&self) -> LcsTable {
        LcsTable::build(self.source, self.target)
    }

    /// LCS length only, in linear space.
    pub fn length(&self) -> u32 {
        lcs_length(self.source, self.target)
    }
}

impl<'a, T: Clone + Eq + Hash> LcsEngine<'a, T> {
    /// Run table construction, backtrack and flattening.
    ///
    /// Fails only when a cap is configured and the table admits more walks
    /// than it allows. The walks are counted from the table before any tree
    /// node is allocated.
    pub fn run(&self) -> LcsResult<LcsReport<T>> {
        let table = self.table();
        if let Some(limit) = self.max_alignments {
            let found = count_alignments(&table, self.source, self.target);
            if found > limit {
                #[cfg(feature = "tracing")]
                tracing::debug!(limit, found, "all-lcs query refused");
                return Err(LcsError::TooManyAlignments { limit, found });
            }
        }

        let tree = backtrack(
            &table,
            self.source,
            self.target,
            self.source.len(),
            self.target.len(),
        );
        let paths = tree.path_count();
        let sequences = tree.to_set();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = table.lcs_len(),
            nodes = tree.len(),
            paths,
            distinct = sequences.len(),
            "all-lcs query finished"
        );

        Ok(LcsReport {
            length: table.lcs_len(),
            paths,
            sequences,
        })
    }
}

/// Run [`compute_all_lcs`](crate::compute_all_lcs) for every pair.
///
/// Results are returned in input order. Queries are independent; with the
/// `parallel` feature they run on the rayon pool.
#[cfg(feature = "parallel")]
pub fn compute_all_lcs_batch<T>(pairs: &[(&[T], &[T])]) -> Vec<LcsSet<T>>
where
    T: Clone + Eq + Hash + Send + Sync,
{
    pairs
        .par_iter()
        .map(|&(source, target)| crate::compute_all_lcs(source, target))
        .collect()
}

/// Run [`compute_all_lcs`](crate::compute_all_lcs) for every pair.
///
/// Results are returned in input order. Queries are independent; with the
/// `parallel` feature they run on the rayon pool.
#[cfg(not(feature = "parallel"))]
pub fn compute_all_lcs_batch<T>(pairs: &[(&[T], &[T])]) -> Vec<LcsSet<T>>
where
    T: Clone + Eq + Hash,
{
    pairs
        .iter()
        .map(|&(source, target)| crate::compute_all_lcs(source, target))
        .collect()
}
