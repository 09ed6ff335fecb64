use std::collections::VecDeque;

use hashbrown::HashMap;
use log::{debug, trace};
use mark_last::MarkLastIterator;
use smallvec::SmallVec;

use super::automaton::{Automaton, ByteAutomaton};
use super::children::{ChildMap, Children};
use super::dense::ByteTable;
use super::node::{Node, NodeId, NodeRef, PatternId};
use super::symbol::{IntoPattern, Symbol};
use crate::error::{BuildError, InvariantViolation};

/// How matches of the empty pattern are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyMatches {
    /// One match at every position `0..=len` of a non-empty haystack.
    #[default]
    EveryPosition,
    /// A single match at position 0.
    FirstOnly,
}

/// Build and scan options for an [`Automaton`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Whether building from zero patterns is allowed. When it is not, the
    /// build fails with [`BuildError::EmptyPatternSet`].
    pub allow_empty_set: bool,
    /// Reporting policy for the empty pattern.
    pub empty_matches: EmptyMatches,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            allow_empty_set: true,
            empty_matches: EmptyMatches::default(),
        }
    }
}

/// A mutable prefix tree of patterns: the build phase of an [`Automaton`].
///
/// Patterns are inserted one at a time. Failure and output links are computed
/// by [`finalize`](Trie::finalize) and are only reported between a finalize and
/// the next structural change. [`freeze`](Trie::freeze) finalizes once and
/// hands the graph over to the immutable scanner.
///
/// # Examples
///
/// ```
/// use actrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("he").unwrap();
/// trie.insert("she").unwrap();
/// trie.finalize();
///
/// let she = trie.find("she").unwrap();
/// assert_eq!(she.fail(), trie.find("he"));
///
/// let automaton = trie.freeze();
/// let starts: Vec<usize> = automaton.find_iter("ushers".chars()).map(|m| m.start()).collect();
/// assert_eq!(starts, [1, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct Trie<S: Symbol, M: ChildMap<S> = Children<S>> {
    nodes: Vec<Node<S, M>>,
    pattern_count: usize,
    /// One past the largest id recorded so far.
    next_id: usize,
    linked: bool,
}

/// A trie over bytes with direct-indexed transitions.
pub type ByteTrie = Trie<u8, ByteTable>;

impl<S: Symbol, M: ChildMap<S>> Default for Trie<S, M> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Symbol> Trie<S> {
    /// Creates a trie with the sparse child map, holding only the root.
    pub fn new() -> Self {
        Self::empty()
    }
}

impl<S: Symbol, M: ChildMap<S>> Trie<S, M> {
    /// Creates a trie with any child map, holding only the root.
    pub fn empty() -> Self {
        let mut root = Node::new(0, None);
        root.fail = NodeId::ROOT;
        Trie {
            nodes: vec![root],
            pattern_count: 0,
            next_id: 0,
            linked: true,
        }
    }

    /// Returns a view of the root node.
    pub fn root(&self) -> NodeRef<'_, S, M> {
        NodeRef::new(&self.nodes, NodeId::ROOT, self.linked)
    }

    /// Returns a view of the node with the given id, if it exists.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, S, M>> {
        (id.index() < self.nodes.len()).then(|| NodeRef::new(&self.nodes, id, self.linked))
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct patterns inserted.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// True if failure and output links reflect the current structure.
    pub fn is_finalized(&self) -> bool {
        self.linked
    }

    /// Walks from the root along `sequence` and returns the node it ends at, or
    /// None if `sequence` is not a prefix of any inserted pattern.
    pub fn find(&self, sequence: impl IntoPattern<S>) -> Option<NodeRef<'_, S, M>> {
        self.root().walk(sequence.collect_pattern())
    }

    /// Adds a child under `parent` for edge `symbol` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::AlreadyExists` if `parent` already has an edge for
    /// `symbol`, and `CapacityExceeded` or `AllocationFailed` if the arena
    /// cannot grow. The trie is unchanged on error.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this trie.
    pub fn add_child(&mut self, parent: NodeId, symbol: S) -> Result<NodeId, BuildError<S>> {
        if self.nodes[parent.index()].children.get(symbol).is_some() {
            return Err(BuildError::AlreadyExists { parent, symbol });
        }
        self.reserve(1)?;
        Ok(self.push_child(parent, symbol))
    }

    /// Marks `node` as the end of pattern `pattern`.
    ///
    /// Returns false, and keeps the original id, if the node already accepts.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this trie.
    pub fn set_accept(&mut self, node: NodeId, pattern: PatternId) -> bool {
        let slot = &mut self.nodes[node.index()].pattern;
        if slot.is_some() {
            return false;
        }
        *slot = Some(pattern);
        self.pattern_count += 1;
        self.next_id = self.next_id.max(pattern.index().saturating_add(1));
        self.linked = false;
        true
    }

    /// Inserts a pattern, numbering it with the next unused [`PatternId`]: one
    /// past the largest id recorded so far, including ids chosen by the caller.
    ///
    /// Returns the terminal node and whether the trie changed. Inserting a
    /// pattern that is already a member returns `false` and leaves the trie
    /// untouched. The empty pattern marks the root as accepting.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` or `AllocationFailed` if the new nodes cannot
    /// be allocated; no node is added in that case.
    pub fn insert(&mut self, pattern: impl IntoPattern<S>) -> Result<(NodeId, bool), BuildError<S>> {
        let id = PatternId(self.next_id);
        self.insert_with_id(pattern, id)
    }

    /// Inserts a pattern under a caller-chosen id.
    ///
    /// See [`insert`](Trie::insert) for the return value and errors.
    pub fn insert_with_id(
        &mut self,
        pattern: impl IntoPattern<S>,
        id: PatternId,
    ) -> Result<(NodeId, bool), BuildError<S>> {
        let pattern = pattern.collect_pattern();
        let (mut node, matched) = self.longest_prefix(&pattern);

        if matched == pattern.len() {
            let inserted = self.set_accept(node, id);
            trace!("insert {pattern:?}: existing node {node:?}, inserted {inserted}");
            return Ok((node, inserted));
        }

        // Everything fallible happens before the first node is linked in.
        self.reserve(pattern.len() - matched)?;
        for (last, symbol) in pattern[matched..].iter().copied().mark_last() {
            node = self.push_child(node, symbol);
            if last {
                self.set_accept(node, id);
            }
        }
        trace!(
            "insert {pattern:?}: {} new nodes ending at {node:?}",
            pattern.len() - matched
        );
        Ok((node, true))
    }

    /// Returns the deepest existing node along `pattern` and its depth.
    fn longest_prefix(&self, pattern: &[S]) -> (NodeId, usize) {
        let mut node = NodeId::ROOT;
        for (i, &symbol) in pattern.iter().enumerate() {
            match self.nodes[node.index()].children.get(symbol) {
                Some(child) => node = child,
                None => return (node, i),
            }
        }
        (node, pattern.len())
    }

    fn reserve(&mut self, additional: usize) -> Result<(), BuildError<S>> {
        let needed = self.nodes.len().saturating_add(additional);
        if needed > NodeId::MAX_NODES {
            return Err(BuildError::CapacityExceeded {
                needed,
                max: NodeId::MAX_NODES,
            });
        }
        self.nodes.try_reserve(additional)?;
        Ok(())
    }

    fn push_child(&mut self, parent: NodeId, symbol: S) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(Node::new(depth, Some(symbol)));
        self.nodes[parent.index()].children.insert(symbol, id);
        self.linked = false;
        id
    }

    /// Computes failure and output links for every node, breadth first.
    ///
    /// Running it again without an intervening insert yields the same links.
    pub fn finalize(&mut self) {
        let root = NodeId::ROOT;
        let root_out = if self.nodes[root.index()].is_accept() {
            root
        } else {
            NodeId::NONE
        };
        self.nodes[root.index()].fail = root;
        self.nodes[root.index()].out = NodeId::NONE;

        let mut queue = VecDeque::with_capacity(self.nodes.len());
        let first_level: SmallVec<[NodeId; 16]> = self.nodes[root.index()]
            .children
            .iter()
            .map(|(_, child)| child)
            .collect();
        for child in first_level {
            let node = &mut self.nodes[child.index()];
            node.fail = root;
            node.out = root_out;
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            let edges: SmallVec<[(S, NodeId); 8]> =
                self.nodes[parent.index()].children.iter().collect();
            let parent_fail = self.nodes[parent.index()].fail;
            for (symbol, child) in edges {
                let mut w = parent_fail;
                while w != root && self.nodes[w.index()].children.get(symbol).is_none() {
                    w = self.nodes[w.index()].fail;
                }
                let fail = match self.nodes[w.index()].children.get(symbol) {
                    Some(target) if target != child => target,
                    _ => root,
                };
                let target = &self.nodes[fail.index()];
                let out = if target.is_accept() { fail } else { target.out };

                let node = &mut self.nodes[child.index()];
                node.fail = fail;
                node.out = out;
                queue.push_back(child);
            }
        }

        self.linked = true;
        debug!(
            "finalized trie: {} nodes, {} patterns",
            self.nodes.len(),
            self.pattern_count
        );
    }

    /// Finalizes if needed and converts the trie into a scanning automaton.
    pub fn freeze(self) -> Automaton<S, M> {
        self.freeze_with(Config::default())
    }

    /// Like [`freeze`](Trie::freeze), with explicit scan options.
    pub fn freeze_with(mut self, config: Config) -> Automaton<S, M> {
        if !self.linked {
            self.finalize();
        }
        Automaton::from_nodes(self.nodes, self.pattern_count, config)
    }

    /// Checks every structural invariant by brute force.
    ///
    /// Each node's failure link is compared against the longest proper suffix
    /// of its path that exists in the trie, and its output link against the
    /// longest such suffix that is a pattern. This is quadratic in pattern
    /// length and meant for tests and debugging.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, or `NotFinalized` if links are stale.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if !self.linked {
            return Err(InvariantViolation::NotFinalized);
        }
        let root = &self.nodes[NodeId::ROOT.index()];
        if root.depth != 0 || root.fail != NodeId::ROOT || !root.out.is_none() {
            return Err(InvariantViolation::BadRoot {
                depth: root.depth as usize,
                fail: root.fail,
                out: root.out,
            });
        }

        let mut paths: HashMap<Vec<S>, NodeId> = HashMap::with_capacity(self.nodes.len());
        let mut stack = vec![(NodeId::ROOT, Vec::new())];
        while let Some((id, path)) = stack.pop() {
            let node = &self.nodes[id.index()];
            for (symbol, child) in node.children.iter() {
                let child_depth = self.nodes[child.index()].depth;
                if child_depth != node.depth + 1 {
                    return Err(InvariantViolation::BadDepth {
                        node: id,
                        depth: node.depth as usize,
                        child,
                        child_depth: child_depth as usize,
                    });
                }
                let mut child_path = path.clone();
                child_path.push(symbol);
                stack.push((child, child_path));
            }
            paths.insert(path, id);
        }

        for (path, &id) in &paths {
            if id == NodeId::ROOT {
                continue;
            }
            let node = &self.nodes[id.index()];
            if node.fail.is_none() {
                return Err(InvariantViolation::UndefinedFail { node: id });
            }
            // Proper suffixes, longest first; the empty suffix is the root.
            let mut suffixes = (1..=path.len()).filter_map(|k| paths.get(&path[k..]).copied());
            let expected_fail = suffixes.next().unwrap_or(NodeId::ROOT);
            if node.fail != expected_fail {
                return Err(InvariantViolation::WrongFail {
                    node: id,
                    expected: expected_fail,
                    found: node.fail,
                });
            }
            let expected_out = std::iter::once(expected_fail)
                .chain(suffixes)
                .find(|s| self.nodes[s.index()].is_accept())
                .unwrap_or(NodeId::NONE);
            if node.out != expected_out {
                return Err(InvariantViolation::WrongOut {
                    node: id,
                    expected: expected_out,
                    found: node.out,
                });
            }
        }

        let accepting = self.nodes.iter().filter(|n| n.is_accept()).count();
        if accepting != self.pattern_count {
            return Err(InvariantViolation::PatternCount {
                recorded: self.pattern_count,
                accepting,
            });
        }
        Ok(())
    }
}

/// A builder for automata over a whole pattern set.
///
/// Pattern ids are the positions of the patterns in the input. A pattern that
/// repeats an earlier one keeps the earlier id.
///
/// # Examples
///
/// ```
/// use actrie::trie::{AutomatonBuilder, EmptyMatches};
///
/// let automaton = AutomatonBuilder::new()
///     .empty_matches(EmptyMatches::FirstOnly)
///     .build(["he", "she", "his", "hers"])
///     .unwrap();
/// assert_eq!(automaton.pattern_count(), 4);
/// assert!(automaton.is_match("ushers".chars()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    config: Config,
}

impl AutomatonBuilder {
    /// Creates a builder with the default [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from an explicit [`Config`].
    pub fn with_config(config: Config) -> Self {
        AutomatonBuilder { config }
    }

    /// Sets whether an empty pattern set is accepted.
    pub fn allow_empty_set(mut self, allow: bool) -> Self {
        self.config.allow_empty_set = allow;
        self
    }

    /// Sets the reporting policy for the empty pattern.
    pub fn empty_matches(mut self, mode: EmptyMatches) -> Self {
        self.config.empty_matches = mode;
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds an automaton with the sparse child map.
    pub fn build<S, P>(&self, patterns: impl IntoIterator<Item = P>) -> Result<Automaton<S>, BuildError<S>>
    where
        S: Symbol,
        P: IntoPattern<S>,
    {
        self.build_with_map(patterns)
    }

    /// Builds a byte automaton with direct-indexed transitions.
    pub fn build_bytes<P>(&self, patterns: impl IntoIterator<Item = P>) -> Result<ByteAutomaton, BuildError<u8>>
    where
        P: IntoPattern<u8>,
    {
        self.build_with_map(patterns)
    }

    /// Builds an automaton with any child map.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPatternSet` if no pattern was given and the configuration
    /// forbids it, or an allocation error from [`Trie::insert_with_id`].
    pub fn build_with_map<S, M, P>(
        &self,
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<Automaton<S, M>, BuildError<S>>
    where
        S: Symbol,
        M: ChildMap<S>,
        P: IntoPattern<S>,
    {
        let mut trie = Trie::<S, M>::empty();
        let mut supplied = 0;
        for (i, pattern) in patterns.into_iter().enumerate() {
            trie.insert_with_id(pattern, PatternId(i))?;
            supplied += 1;
        }
        if supplied == 0 && !self.config.allow_empty_set {
            return Err(BuildError::EmptyPatternSet);
        }
        Ok(trie.freeze_with(self.config.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn trie_of(patterns: &[&str]) -> Trie<char> {
        let mut trie = Trie::new();
        for p in patterns {
            trie.insert(*p).unwrap();
        }
        trie
    }

    #[track_caller]
    fn check_one_insert(
        needle: &str,
        expected_depth: usize,
        expected_last: Option<char>,
        expected_inserted: bool,
    ) {
        let mut trie = Trie::<char>::new();
        let (id, inserted) = trie.insert(needle).unwrap();
        assert_eq!(inserted, expected_inserted, "{needle}");
        let node = trie.node(id).unwrap();
        assert!(node.is_accept());
        assert_eq!(node.depth(), expected_depth);
        assert_eq!(node.symbol(), expected_last);
        assert_eq!(trie.find(needle), Some(node));

        if expected_depth >= 2 {
            let half: String = needle.chars().take(expected_depth / 2).collect();
            let prefix = trie.find(half.as_str()).unwrap();
            assert!(!prefix.is_accept());
            assert_eq!(prefix.depth(), expected_depth / 2);
            assert_eq!(prefix.symbol(), half.chars().last());
        }
    }

    /// `suffixes` holds `(prefix_length, fail_depth)` pairs.
    #[track_caller]
    fn check_suffix(needle: &str, suffixes: &[(usize, usize)]) {
        let mut trie = Trie::<char>::new();
        trie.insert(needle).unwrap();
        trie.finalize();
        let chars: Vec<char> = needle.chars().collect();
        assert_eq!(suffixes.len(), chars.len());
        for &(len, fail_depth) in suffixes {
            let node = trie.find(&chars[..len]).unwrap();
            assert_eq!(node.depth(), len);
            let fail = node.fail().unwrap();
            assert_eq!(fail.depth(), fail_depth, "{needle}[..{len}]");
        }
        trie.validate().unwrap();
    }

    #[test]
    fn insert_reports_depth_and_membership() {
        check_one_insert("ANPANMAN", 8, Some('N'), true);
        check_one_insert("MAN THE", 7, Some('E'), true);
        check_one_insert("WE\u{90}ER", 5, Some('R'), true);
        check_one_insert("NOW ", 4, Some(' '), true);
        check_one_insert("NEND", 4, Some('D'), true);
        check_one_insert("NOT FOUND", 9, Some('D'), true);
        check_one_insert("NOT FO\u{e0}ND", 9, Some('D'), true);
        check_one_insert("ABCDABD", 7, Some('D'), true);
        check_one_insert("abracadabra", 11, Some('a'), true);
        // The empty pattern only flips the root to accepting.
        check_one_insert("", 0, None, true);
    }

    #[test]
    fn failure_links_anpanman() {
        check_suffix(
            "ANPANMAN",
            &[(1, 0), (2, 0), (3, 0), (4, 1), (5, 2), (6, 0), (7, 1), (8, 2)],
        );
    }

    #[test]
    fn failure_links_abcdabd() {
        check_suffix(
            "ABCDABD",
            &[(1, 0), (2, 0), (3, 0), (4, 0), (5, 1), (6, 2), (7, 0)],
        );
    }

    #[test]
    fn failure_links_abracadabra() {
        check_suffix(
            "abracadabra",
            &[
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 1),
                (5, 0),
                (6, 1),
                (7, 0),
                (8, 1),
                (9, 2),
                (10, 3),
                (11, 4),
            ],
        );
    }

    #[test]
    fn empty_pattern_creates_no_nodes() {
        let mut trie = Trie::<char>::new();
        let (id, inserted) = trie.insert("").unwrap();
        assert!(inserted);
        assert_eq!(id, NodeId::ROOT);
        assert_eq!(trie.node_count(), 1);
        assert!(trie.root().is_accept());
        assert_eq!(trie.find("a"), None);
        trie.finalize();
        trie.validate().unwrap();
    }

    #[test]
    fn reinsert_is_a_no_op() {
        let mut trie = trie_of(&["she", "he"]);
        let (first, _) = trie.insert("hers").unwrap();
        let nodes = trie.node_count();
        let (second, inserted) = trie.insert("hers").unwrap();
        assert_eq!(first, second);
        assert!(!inserted);
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.pattern_count(), 3);
        assert_eq!(trie.node(second).unwrap().pattern(), Some(PatternId(2)));
    }

    #[test]
    fn sequential_ids_skip_caller_chosen_ids() {
        let mut trie = Trie::<char>::new();
        trie.insert_with_id("a", PatternId(1)).unwrap();
        trie.insert("b").unwrap();
        let b = trie.find("b").unwrap().pattern();
        assert_eq!(b, Some(PatternId(2)));

        let c = trie.add_child(NodeId::ROOT, 'c').unwrap();
        assert!(trie.set_accept(c, PatternId(10)));
        trie.insert("d").unwrap();
        assert_eq!(trie.find("d").unwrap().pattern(), Some(PatternId(11)));

        // A re-insert does not consume an id.
        trie.insert("d").unwrap();
        trie.insert("e").unwrap();
        assert_eq!(trie.find("e").unwrap().pattern(), Some(PatternId(12)));

        let ids: Vec<_> = "abcde"
            .chars()
            .filter_map(|s| trie.root().get(s).and_then(|n| n.pattern()))
            .collect();
        assert_eq!(ids, [1, 2, 10, 11, 12].map(PatternId));
    }

    #[test]
    fn prefix_of_existing_pattern_is_inserted() {
        let mut trie = trie_of(&["hers"]);
        let nodes = trie.node_count();
        let (id, inserted) = trie.insert("he").unwrap();
        assert!(inserted);
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.node(id).unwrap().depth(), 2);
    }

    #[test]
    fn add_child_rejects_existing_edge() {
        let mut trie = trie_of(&["ab"]);
        let err = trie.add_child(NodeId::ROOT, 'a').unwrap_err();
        assert_eq!(
            err,
            BuildError::AlreadyExists {
                parent: NodeId::ROOT,
                symbol: 'a'
            }
        );
        let b = trie.add_child(NodeId::ROOT, 'b').unwrap();
        assert_eq!(trie.node(b).unwrap().depth(), 1);
        assert!(!trie.node(b).unwrap().is_accept());
        assert!(trie.set_accept(b, PatternId(7)));
        assert!(!trie.set_accept(b, PatternId(8)));
        assert_eq!(trie.find("b").unwrap().pattern(), Some(PatternId(7)));
    }

    #[test]
    fn links_are_hidden_until_finalized() {
        let mut trie = trie_of(&["she", "he"]);
        assert!(!trie.is_finalized());
        assert_eq!(trie.find("she").unwrap().fail(), None);
        assert_eq!(trie.validate(), Err(InvariantViolation::NotFinalized));

        trie.finalize();
        assert!(trie.is_finalized());
        let she = trie.find("she").unwrap();
        assert_eq!(she.fail(), trie.find("he"));
        assert_eq!(she.out(), trie.find("he"));
        assert_eq!(trie.find("sh").unwrap().fail(), trie.find("h"));
        assert_eq!(trie.find("sh").unwrap().out(), None);

        trie.insert("hers").unwrap();
        assert_eq!(trie.find("she").unwrap().fail(), None);
    }

    #[test]
    fn output_links_chain_through_accepting_suffixes() {
        let mut trie = trie_of(&["a", "aa", "aaa", "aaaa"]);
        trie.finalize();
        trie.validate().unwrap();
        let chain: Vec<usize> = std::iter::successors(trie.find("aaaa"), |n| n.out())
            .map(|n| n.depth())
            .collect();
        assert_eq!(chain, [4, 3, 2, 1]);
    }

    #[test]
    fn empty_pattern_terminates_every_output_chain() {
        let mut trie = trie_of(&["", "ab", "b"]);
        trie.finalize();
        trie.validate().unwrap();
        assert_eq!(trie.root().out(), None);
        assert_eq!(trie.find("a").unwrap().out(), Some(trie.root()));
        assert_eq!(trie.find("ab").unwrap().out(), trie.find("b"));
        assert_eq!(trie.find("b").unwrap().out(), Some(trie.root()));
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut trie = trie_of(&["he", "she", "his", "hers", "usher"]);
        trie.finalize();
        let before: Vec<_> = trie.nodes.iter().map(|n| (n.fail, n.out)).collect();
        trie.finalize();
        let after: Vec<_> = trie.nodes.iter().map(|n| (n.fail, n.out)).collect();
        assert_eq!(before, after);
        trie.validate().unwrap();
    }

    #[test]
    fn children_iterate_in_symbol_order() {
        let trie = trie_of(&["d", "b", "a", "c"]);
        let symbols: Vec<char> = trie.root().children().map(|(s, _)| s).collect();
        assert_eq!(symbols, ['a', 'b', 'c', 'd']);
    }

    #[test]
    fn byte_trie_matches_sparse_trie() {
        let patterns: [&[u8]; 4] = [b"ANPANMAN", b"ABCDABD", b"abracadabra", b"NAN"];
        let mut sparse = Trie::<u8>::new();
        let mut dense = ByteTrie::empty();
        for p in patterns {
            sparse.insert(p).unwrap();
            dense.insert(p).unwrap();
        }
        sparse.finalize();
        dense.finalize();
        dense.validate().unwrap();
        assert_eq!(sparse.node_count(), dense.node_count());
        for (a, b) in sparse.nodes.iter().zip(&dense.nodes) {
            assert_eq!(
                (a.symbol, a.depth, a.pattern, a.fail, a.out),
                (b.symbol, b.depth, b.pattern, b.fail, b.out)
            );
        }
    }

    #[test]
    fn builder_numbers_patterns_by_position() {
        let automaton = AutomatonBuilder::new().build(["he", "she", "he"]).unwrap();
        assert_eq!(automaton.pattern_count(), 2);
        let she = automaton.root().walk("she".chars()).unwrap();
        assert_eq!(she.pattern(), Some(PatternId(1)));
        let he = automaton.root().walk("he".chars()).unwrap();
        assert_eq!(he.pattern(), Some(PatternId(0)));
    }

    #[test]
    fn builder_rejects_empty_set_when_configured() {
        let none: [&str; 0] = [];
        let err = AutomatonBuilder::new().allow_empty_set(false).build(none).unwrap_err();
        assert_eq!(err, BuildError::EmptyPatternSet);

        let automaton = AutomatonBuilder::new().build(none).unwrap();
        assert_eq!(automaton.pattern_count(), 0);
        assert!(!automaton.is_match("anything".chars()));
    }
}
