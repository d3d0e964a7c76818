//! Backtracking the LCS table into every optimal alignment.
//!
//! From cell `(i, j)`:
//! - `i == 0 || j == 0` yields [`AlignmentNode::Empty`];
//! - a matching trailing pair is part of every optimal alignment at that cell,
//!   so it yields a single [`AlignmentNode::Matched`] and moves diagonally;
//! - otherwise the larger of `table[i][j-1]` and `table[i-1][j]` decides the
//!   direction, and a tie keeps both.
//!
//! `i + j` strictly decreases along every edge, so the walk terminates.
//! The construction runs on an explicit work stack rather than the call stack,
//! so long inputs cannot overflow it.

use std::hash::Hash;

use crate::table::LcsTable;
use crate::tree::{AlignmentNode, AlignmentTree, LcsSet, NodeId};

/// Direction(s) kept at a non-matching cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Skip {
    /// Only `(i, j-1)` keeps the optimum.
    Target,
    /// Only `(i-1, j)` keeps the optimum.
    Source,
    /// Both do.
    Both,
}

fn skip_direction(table: &LcsTable, i: usize, j: usize) -> Skip {
    let left = table.get(i, j - 1);
    let up = table.get(i - 1, j);
    match left.cmp(&up) {
        std::cmp::Ordering::Greater => Skip::Target,
        std::cmp::Ordering::Less => Skip::Source,
        std::cmp::Ordering::Equal => Skip::Both,
    }
}

enum Task<T> {
    Visit(usize, usize),
    Match(T),
    Branch(Skip),
}

/// Build the alignment tree rooted at cell `(i, j)` of `table`.
///
/// `table` must have been built from `source` and `target`. Call with
/// `(source.len(), target.len())` to cover the whole inputs.
///
/// # Panics
/// Panics if the table's shape does not match the inputs or `(i, j)` lies
/// outside the table.
pub fn backtrack<T: Clone + PartialEq>(
    table: &LcsTable,
    source: &[T],
    target: &[T],
    i: usize,
    j: usize,
) -> AlignmentTree<T> {
    assert!(
        table.rows() == source.len() + 1 && table.cols() == target.len() + 1,
        "table is {}x{} but inputs need {}x{}",
        table.rows(),
        table.cols(),
        source.len() + 1,
        target.len() + 1
    );
    assert!(
        i < table.rows() && j < table.cols(),
        "start cell ({i}, {j}) outside table"
    );

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("backtrack", i, j).entered();

    let mut tree = AlignmentTree::with_capacity(i + j + 1);
    let mut tasks = vec![Task::Visit(i, j)];
    // Ids of finished subtrees, consumed by their parent's Match/Branch task.
    let mut done: Vec<NodeId> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(i, j) => {
                if i == 0 || j == 0 {
                    done.push(tree.push(AlignmentNode::Empty));
                } else if source[i - 1] == target[j - 1] {
                    tasks.push(Task::Match(target[j - 1].clone()));
                    tasks.push(Task::Visit(i - 1, j - 1));
                } else {
                    let skip = skip_direction(table, i, j);
                    tasks.push(Task::Branch(skip));
                    // Left subtree is finished first, so it sits below right on `done`.
                    if skip != Skip::Target {
                        tasks.push(Task::Visit(i - 1, j));
                    }
                    if skip != Skip::Source {
                        tasks.push(Task::Visit(i, j - 1));
                    }
                }
            }
            Task::Match(token) => {
                let child = pop_child(&mut done);
                done.push(tree.push(AlignmentNode::Matched { token, child }));
            }
            Task::Branch(skip) => {
                let (left, right) = match skip {
                    Skip::Target => (Some(pop_child(&mut done)), None),
                    Skip::Source => (None, Some(pop_child(&mut done))),
                    Skip::Both => {
                        let right = pop_child(&mut done);
                        (Some(pop_child(&mut done)), Some(right))
                    }
                };
                done.push(tree.push(AlignmentNode::Branch { left, right }));
            }
        }
    }

    debug_assert_eq!(done.len(), 1);
    tree
}

fn pop_child(done: &mut Vec<NodeId>) -> NodeId {
    match done.pop() {
        Some(id) => id,
        None => unreachable!("child subtree is pushed before its parent task runs"),
    }
}

/// Number of walks [`backtrack`] would produce from `(m, n)`, saturating at
/// `usize::MAX`.
///
/// Follows the same match and tie rules as the tree, but keeps only two rows
/// of counts, so it runs in O(m·n) time whatever the number of walks.
pub fn count_alignments<T: PartialEq>(table: &LcsTable, source: &[T], target: &[T]) -> usize {
    assert!(
        table.rows() == source.len() + 1 && table.cols() == target.len() + 1,
        "table is {}x{} but inputs need {}x{}",
        table.rows(),
        table.cols(),
        source.len() + 1,
        target.len() + 1
    );

    let width = target.len();
    let mut prev = vec![1usize; width + 1];
    let mut curr = vec![1usize; width + 1];

    for i in 1..=source.len() {
        for j in 1..=width {
            curr[j] = if source[i - 1] == target[j - 1] {
                prev[j - 1]
            } else {
                match skip_direction(table, i, j) {
                    Skip::Target => curr[j - 1],
                    Skip::Source => prev[j],
                    Skip::Both => curr[j - 1].saturating_add(prev[j]),
                }
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[width]
}

/// Flatten an alignment tree into its distinct sequences.
pub fn flatten<T: Clone + Eq + Hash>(tree: &AlignmentTree<T>) -> LcsSet<T> {
    tree.to_set()
}

/// Reconstruct a single LCS without building the tree.
///
/// On a tie the walk drops a source token, so the result is always one of the
/// sequences [`backtrack`] produces.
pub fn backtrack_one<T: Clone + PartialEq>(table: &LcsTable, source: &[T], target: &[T]) -> Vec<T> {
    let (mut i, mut j) = (source.len(), target.len());
    let mut rev = Vec::with_capacity(table.lcs_len() as usize);

    while i > 0 && j > 0 {
        if source[i - 1] == target[j - 1] {
            rev.push(target[j - 1].clone());
            i -= 1;
            j -= 1;
        } else if table.get(i, j - 1) > table.get(i - 1, j) {
            j -= 1;
        } else {
            i -= 1;
        }
    }

    rev.reverse();
    rev
}
