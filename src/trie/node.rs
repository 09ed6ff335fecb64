use std::fmt;

use super::children::ChildMap;
use super::symbol::Symbol;

/// Index of a node in the trie arena.
///
/// Ids are plain indices, so failure and output links can point anywhere in
/// the graph (including cycles through the root) without ownership questions.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// The root of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node": an undefined failure link or an empty output link.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Largest number of nodes a trie can hold.
    pub(crate) const MAX_NODES: usize = u32::MAX as usize;

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index < Self::MAX_NODES);
        NodeId(index as u32)
    }

    /// True for the [`NONE`](NodeId::NONE) sentinel.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn get(self) -> Option<NodeId> {
        (!self.is_none()).then_some(self)
    }
}

/// Identifier of an inserted pattern, reported with every match.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct PatternId(pub usize);

impl PatternId {
    /// The raw id.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One trie vertex.
#[derive(Clone, Debug)]
pub(crate) struct Node<S: Symbol, M: ChildMap<S>> {
    pub(crate) children: M,
    /// Label of the edge from the parent; None for the root.
    pub(crate) symbol: Option<S>,
    pub(crate) depth: u32,
    /// Pattern ending here, if this is an accepting node.
    pub(crate) pattern: Option<PatternId>,
    pub(crate) fail: NodeId,
    pub(crate) out: NodeId,
}

impl<S: Symbol, M: ChildMap<S>> Node<S, M> {
    pub(crate) fn new(depth: u32, symbol: Option<S>) -> Self {
        Node {
            children: M::default(),
            symbol,
            depth,
            pattern: None,
            fail: NodeId::NONE,
            out: NodeId::NONE,
        }
    }

    #[inline]
    pub(crate) fn is_accept(&self) -> bool {
        self.pattern.is_some()
    }
}

/// A read-only view of one node and the graph it lives in.
///
/// Mirrors the navigation API of a pointer-based trie: [`get`](NodeRef::get)
/// follows an edge, [`fail`](NodeRef::fail) and [`out`](NodeRef::out) follow
/// links. Links are only reported while they are valid, i.e. after
/// [`Trie::finalize`](super::Trie::finalize) and before the next insert.
pub struct NodeRef<'t, S: Symbol, M: ChildMap<S>> {
    nodes: &'t [Node<S, M>],
    id: NodeId,
    linked: bool,
}

impl<S: Symbol, M: ChildMap<S>> Clone for NodeRef<'_, S, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Symbol, M: ChildMap<S>> Copy for NodeRef<'_, S, M> {}

impl<S: Symbol, M: ChildMap<S>> PartialEq for NodeRef<'_, S, M> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.nodes, other.nodes) && self.id == other.id
    }
}

impl<S: Symbol, M: ChildMap<S>> Eq for NodeRef<'_, S, M> {}

impl<S: Symbol, M: ChildMap<S>> fmt::Debug for NodeRef<'_, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("symbol", &node.symbol)
            .field("depth", &node.depth)
            .field("pattern", &node.pattern)
            .field("fail", &node.fail)
            .field("out", &node.out)
            .finish()
    }
}

impl<'t, S: Symbol, M: ChildMap<S>> NodeRef<'t, S, M> {
    pub(crate) fn new(nodes: &'t [Node<S, M>], id: NodeId, linked: bool) -> Self {
        NodeRef { nodes, id, linked }
    }

    #[inline]
    fn node(&self) -> &'t Node<S, M> {
        &self.nodes[self.id.index()]
    }

    #[inline]
    fn at(&self, id: NodeId) -> Self {
        NodeRef { id, ..*self }
    }

    /// The arena id of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// True for the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    /// Number of edges from the root; the length of the prefix this node spells.
    #[inline]
    pub fn depth(&self) -> usize {
        self.node().depth as usize
    }

    /// The label of the edge leading into this node, or None for the root.
    #[inline]
    pub fn symbol(&self) -> Option<S> {
        self.node().symbol
    }

    /// True if some inserted pattern ends at this node.
    #[inline]
    pub fn is_accept(&self) -> bool {
        self.node().is_accept()
    }

    /// The pattern ending at this node, if any.
    #[inline]
    pub fn pattern(&self) -> Option<PatternId> {
        self.node().pattern
    }

    /// Returns the node that `symbol`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, symbol: S) -> Option<Self> {
        self.node().children.get(symbol).map(|id| self.at(id))
    }

    /// The failure link, or None while links are stale.
    pub fn fail(&self) -> Option<Self> {
        if !self.linked {
            return None;
        }
        self.node().fail.get().map(|id| self.at(id))
    }

    /// The output link: the deepest accepting node on the failure chain.
    ///
    /// None when no proper suffix of this node's prefix is a pattern, or while
    /// links are stale.
    pub fn out(&self) -> Option<Self> {
        if !self.linked {
            return None;
        }
        self.node().out.get().map(|id| self.at(id))
    }

    /// Returns an iterator over all children of this node, in symbol order.
    pub fn children(&self) -> impl Iterator<Item = (S, Self)> + 't {
        let this = *self;
        self.node()
            .children
            .iter()
            .map(move |(symbol, id)| (symbol, this.at(id)))
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// Follows `sequence` edge by edge from this node.
    pub fn walk<I: IntoIterator<Item = S>>(&self, sequence: I) -> Option<Self> {
        sequence.into_iter().try_fold(*self, |node, symbol| node.get(symbol))
    }
}
