use std::collections::TryReserveError;

use thiserror::Error;

use crate::trie::{NodeId, Symbol};

/// Errors that can occur while building a trie or an automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError<S: Symbol> {
    /// A node already has an outgoing edge for this symbol.
    #[error("node {parent:?} already has a child for {symbol:?}")]
    AlreadyExists {
        /// The node that was to receive the edge.
        parent: NodeId,
        /// The edge label already in use.
        symbol: S,
    },
    /// No patterns were supplied and the configuration disallows an empty set.
    #[error("empty pattern set")]
    EmptyPatternSet,
    /// The node id space is exhausted.
    #[error("trie would need {needed} nodes, at most {max} are supported")]
    CapacityExceeded {
        /// Node count the operation would have reached.
        needed: usize,
        /// Largest supported node count.
        max: usize,
    },
    /// The node arena could not grow. The trie is left unchanged.
    #[error("node allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),
}

/// A broken structural invariant, reported by [`Trie::validate`](crate::trie::Trie::validate).
///
/// These indicate a bug in link construction, not a user error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The trie changed after the last finalize, so there are no links to check.
    #[error("links are stale: the trie changed since the last finalize")]
    NotFinalized,
    /// The root must have depth 0, fail to itself, and have no output link.
    #[error("root is malformed: depth {depth}, fail {fail:?}, out {out:?}")]
    BadRoot {
        /// Recorded root depth.
        depth: usize,
        /// Recorded root failure link.
        fail: NodeId,
        /// Recorded root output link.
        out: NodeId,
    },
    /// A child is not exactly one level below its parent.
    #[error("node {node:?} at depth {depth} has child {child:?} at depth {child_depth}")]
    BadDepth {
        /// The parent.
        node: NodeId,
        /// Depth of the parent.
        depth: usize,
        /// The offending child.
        child: NodeId,
        /// Depth recorded on the child.
        child_depth: usize,
    },
    /// A non-root node was never given a failure link.
    #[error("node {node:?} has an undefined failure link")]
    UndefinedFail {
        /// The node missing its link.
        node: NodeId,
    },
    /// A failure link does not point at the longest proper suffix in the trie.
    #[error("node {node:?} fails to {found:?}, expected {expected:?}")]
    WrongFail {
        /// The node whose link is wrong.
        node: NodeId,
        /// The longest proper suffix that is a path in the trie.
        expected: NodeId,
        /// The recorded failure link.
        found: NodeId,
    },
    /// An output link does not point at the deepest accepting proper suffix.
    #[error("node {node:?} outputs to {found:?}, expected {expected:?}")]
    WrongOut {
        /// The node whose link is wrong.
        node: NodeId,
        /// The deepest accepting proper suffix, or `NodeId::NONE`.
        expected: NodeId,
        /// The recorded output link.
        found: NodeId,
    },
    /// The pattern counter disagrees with the number of accepting nodes.
    #[error("{accepting} accepting nodes for {recorded} inserted patterns")]
    PatternCount {
        /// Patterns the trie counted on insert.
        recorded: usize,
        /// Accepting nodes actually present.
        accepting: usize,
    },
}
