use log::debug;

use super::builder::{AutomatonBuilder, Config};
use super::children::{ChildMap, Children};
use super::dense::ByteTable;
use super::node::{Node, NodeId, NodeRef};
use super::symbol::{IntoPattern, Symbol};
use crate::error::BuildError;

/// A finalized, immutable Aho-Corasick automaton.
///
/// Built once from a pattern set and reused across any number of haystacks.
/// Scanning only needs `&self`, so an automaton can be shared between threads
/// and scanned concurrently.
///
/// # Examples
///
/// ```
/// use actrie::trie::Automaton;
///
/// let automaton = Automaton::new(["he", "she", "his", "hers"]).unwrap();
/// let found: Vec<(usize, usize)> = automaton
///     .find_iter("ushers".chars())
///     .map(|m| (m.start(), m.pattern.index()))
///     .collect();
/// assert_eq!(found, [(1, 1), (2, 0), (2, 3)]);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: Symbol, M: ChildMap<S> = Children<S>> {
    pub(crate) nodes: Box<[Node<S, M>]>,
    pattern_count: usize,
    max_pattern_len: usize,
    pub(crate) config: Config,
}

/// An automaton over bytes with direct-indexed transitions.
pub type ByteAutomaton = Automaton<u8, ByteTable>;

impl<S: Symbol> Automaton<S> {
    /// Builds an automaton from a pattern set with the default [`Config`].
    ///
    /// Pattern ids are positions in `patterns`.
    pub fn new<P: IntoPattern<S>>(patterns: impl IntoIterator<Item = P>) -> Result<Self, BuildError<S>> {
        AutomatonBuilder::new().build(patterns)
    }
}

impl<S: Symbol, M: ChildMap<S>> Automaton<S, M> {
    /// Builds an automaton with any child map from a pattern set, using the
    /// default [`Config`].
    ///
    /// ```
    /// use actrie::trie::ByteAutomaton;
    ///
    /// let automaton = ByteAutomaton::from_patterns([b"GATT", b"TACA"]).unwrap();
    /// assert_eq!(automaton.search(b"GATTACA"), 0);
    /// ```
    pub fn from_patterns<P: IntoPattern<S>>(
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<Self, BuildError<S>> {
        AutomatonBuilder::new().build_with_map(patterns)
    }

    pub(crate) fn from_nodes(nodes: Vec<Node<S, M>>, pattern_count: usize, config: Config) -> Self {
        debug_assert!(
            nodes.iter().all(|n| !n.fail.is_none()),
            "automaton built from a trie with undefined failure links"
        );
        let max_pattern_len = nodes
            .iter()
            .filter(|n| n.is_accept())
            .map(|n| n.depth as usize)
            .max()
            .unwrap_or(0);
        debug!(
            "froze automaton: {} nodes, {pattern_count} patterns, longest pattern {max_pattern_len}",
            nodes.len()
        );
        Automaton {
            nodes: nodes.into_boxed_slice(),
            pattern_count,
            max_pattern_len,
            config,
        }
    }

    /// Returns a view of the root node.
    pub fn root(&self) -> NodeRef<'_, S, M> {
        NodeRef::new(&self.nodes, NodeId::ROOT, true)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct patterns.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Length of the longest pattern.
    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// The options this automaton was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<S, M> {
        &self.nodes[id.index()]
    }

    /// Follows failure links from `state` until an edge for `symbol` exists,
    /// and takes it. Returns the root when no suffix can be extended.
    #[inline]
    pub(crate) fn next_state(&self, state: NodeId, symbol: S) -> NodeId {
        self.transition(state, symbol).0
    }

    /// Like [`next_state`](Automaton::next_state), also returning the number
    /// of failure links followed.
    ///
    /// Every hop lowers the depth and every symbol raises it by at most one,
    /// so the hops over a whole scan never exceed the haystack length.
    #[inline]
    pub(crate) fn transition(&self, mut state: NodeId, symbol: S) -> (NodeId, usize) {
        let mut hops = 0;
        loop {
            let node = self.node(state);
            if let Some(next) = node.children.get(symbol) {
                return (next, hops);
            }
            if state == NodeId::ROOT {
                return (NodeId::ROOT, hops);
            }
            state = node.fail;
            hops += 1;
        }
    }
}
