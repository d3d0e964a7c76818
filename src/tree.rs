//! Alignment tree: a compact representation of every optimal alignment.
//!
//! Nodes live in an index-addressed arena owned by [`AlignmentTree`]. Each node
//! is referenced by exactly one parent, so the structure is a tree even though
//! links are plain indices. The backtracker appends nodes in post-order:
//! children always precede their parent and the root is the last node.
//!
//! A root-to-leaf walk collects matched tokens from the *end* of the inputs
//! towards the start; [`Paths`] reverses each walk so yielded sequences are in
//! input order.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::{LcsError, LcsResult};

/// Set of distinct longest common subsequences.
pub type LcsSet<T> = FxHashSet<Vec<T>>;

/// Index of a node inside its [`AlignmentTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One cell of the backtrack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlignmentNode<T> {
    /// Row 0 or column 0: nothing left to align.
    Empty,
    /// Trailing tokens matched; `token` belongs to every alignment through here.
    Matched { token: T, child: NodeId },
    /// No match. `left` skips a target token `(i, j-1)`, `right` skips a
    /// source token `(i-1, j)`. Both are set on a tie.
    Branch {
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
}

impl<T> AlignmentNode<T> {
    /// True if no walk continues past this node.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            AlignmentNode::Empty
                | AlignmentNode::Branch {
                    left: None,
                    right: None
                }
        )
    }

    /// Matched token, if any.
    pub fn token(&self) -> Option<&T> {
        match self {
            AlignmentNode::Matched { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Arena-backed alignment tree produced by [`backtrack`](crate::backtrack::backtrack).
#[derive(Clone, Debug)]
pub struct AlignmentTree<T> {
    nodes: Vec<AlignmentNode<T>>,
}

impl<T> AlignmentTree<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node. Children referenced by `node` must already be present.
    pub(crate) fn push(&mut self, node: AlignmentNode<T>) -> NodeId {
        debug_assert!(match &node {
            AlignmentNode::Empty => true,
            AlignmentNode::Matched { child, .. } => child.0 < self.nodes.len(),
            AlignmentNode::Branch { left, right } => left
                .iter()
                .chain(right.iter())
                .all(|c| c.0 < self.nodes.len()),
        });
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Root node id, i.e. the cell the backtrack started from.
    ///
    /// # Panics
    /// Panics on a tree with no nodes, which the backtracker never produces.
    pub fn root(&self) -> NodeId {
        assert!(!self.nodes.is_empty(), "alignment tree has no root");
        NodeId(self.nodes.len() - 1)
    }

    /// Node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &AlignmentNode<T> {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of root-to-leaf walks, saturating at `usize::MAX`.
    ///
    /// Computed bottom-up over the arena without materializing any walk.
    pub fn path_count(&self) -> usize {
        let mut counts = vec![0usize; self.nodes.len()];
        for (idx, node) in self.nodes.iter().enumerate() {
            counts[idx] = match node {
                AlignmentNode::Empty => 1,
                AlignmentNode::Matched { child, .. } => counts[child.0],
                AlignmentNode::Branch { left, right } => match (left, right) {
                    (None, None) => 1,
                    _ => left
                        .iter()
                        .chain(right.iter())
                        .fold(0usize, |acc, c| acc.saturating_add(counts[c.0])),
                },
            };
        }
        counts.last().copied().unwrap_or(0)
    }

    /// Iterate over every root-to-leaf walk as a token sequence in input order.
    ///
    /// Distinct walks may spell the same sequence; see [`to_set`](Self::to_set).
    pub fn paths(&self) -> Paths<'_, T> {
        let stack = if self.nodes.is_empty() {
            Vec::new()
        } else {
            vec![(self.root(), 0)]
        };
        Paths {
            tree: self,
            stack,
            buf: Vec::new(),
        }
    }

    /// Flatten into the set of distinct sequences.
    pub fn to_set(&self) -> LcsSet<T>
    where
        T: Clone + Eq + Hash,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("flatten", nodes = self.nodes.len()).entered();

        self.paths().collect()
    }

    /// Like [`to_set`](Self::to_set), but refuses to expand more than `limit`
    /// walks.
    pub fn to_set_capped(&self, limit: usize) -> LcsResult<LcsSet<T>>
    where
        T: Clone + Eq + Hash,
    {
        let found = self.path_count();
        if found > limit {
            return Err(LcsError::TooManyAlignments { limit, found });
        }
        Ok(self.to_set())
    }
}

/// Depth-first iterator over the walks of an [`AlignmentTree`].
///
/// Left children are explored before right children.
pub struct Paths<'a, T> {
    tree: &'a AlignmentTree<T>,
    stack: Vec<(NodeId, usize)>,
    buf: Vec<&'a T>,
}

impl<'a, T: Clone> Paths<'a, T> {
    fn emit(&self) -> Vec<T> {
        self.buf.iter().rev().map(|t| (*t).clone()).collect()
    }
}

impl<'a, T: Clone> Iterator for Paths<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some((id, depth)) = self.stack.pop() {
            self.buf.truncate(depth);
            match tree.node(id) {
                AlignmentNode::Empty => return Some(self.emit()),
                AlignmentNode::Matched { token, child } => {
                    self.buf.push(token);
                    self.stack.push((*child, self.buf.len()));
                }
                AlignmentNode::Branch {
                    left: None,
                    right: None,
                } => return Some(self.emit()),
                AlignmentNode::Branch { left, right } => {
                    let depth = self.buf.len();
                    if let Some(r) = right {
                        self.stack.push((*r, depth));
                    }
                    if let Some(l) = left {
                        self.stack.push((*l, depth));
                    }
                }
            }
        }
        None
    }
}
