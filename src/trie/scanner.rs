use std::borrow::Borrow;
use std::iter::{Fuse, FusedIterator};
use std::ops::Range;

use super::automaton::Automaton;
use super::builder::EmptyMatches;
use super::children::ChildMap;
use super::node::{NodeId, PatternId};
use super::symbol::Symbol;

/// One occurrence of a pattern in a haystack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    /// Index one past the last matched symbol.
    pub end: usize,
    /// The pattern that matched.
    pub pattern: PatternId,
    /// Length of the pattern, in symbols.
    pub len: usize,
}

impl Match {
    /// Index of the first matched symbol.
    #[inline]
    pub fn start(&self) -> usize {
        self.end - self.len
    }

    /// The matched span of the haystack.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end
    }
}

/// A lazy iterator over every match in a haystack, in scan order.
///
/// Matches come out by non-decreasing end index; matches sharing an end
/// index come out longest first. Dropping the iterator early simply stops the
/// scan.
pub struct Matches<'a, S: Symbol, M: ChildMap<S>, I: Iterator> {
    automaton: &'a Automaton<S, M>,
    haystack: Fuse<I>,
    /// The first symbol, pulled early to tell an empty haystack apart.
    lookahead: Option<S>,
    started: bool,
    state: NodeId,
    pos: usize,
    /// Next accepting node to report at `pos`.
    pending: NodeId,
}

impl<'a, S, M, I> Matches<'a, S, M, I>
where
    S: Symbol,
    M: ChildMap<S>,
    I: Iterator,
    I::Item: Borrow<S>,
{
    fn new(automaton: &'a Automaton<S, M>, haystack: I) -> Self {
        Matches {
            automaton,
            haystack: haystack.fuse(),
            lookahead: None,
            started: false,
            state: NodeId::ROOT,
            pos: 0,
            pending: NodeId::NONE,
        }
    }

    /// Number of symbols consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn next_symbol(&mut self) -> Option<S> {
        match self.lookahead.take() {
            Some(symbol) => Some(symbol),
            None => self.haystack.next().map(|s| *Borrow::<S>::borrow(&s)),
        }
    }
}

impl<S, M, I> Iterator for Matches<'_, S, M, I>
where
    S: Symbol,
    M: ChildMap<S>,
    I: Iterator,
    I::Item: Borrow<S>,
{
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(id) = self.pending.get() {
                let node = self.automaton.node(id);
                self.pending = node.out;
                let suppressed = node.depth == 0
                    && self.pos > 0
                    && self.automaton.config.empty_matches == EmptyMatches::FirstOnly;
                match node.pattern {
                    Some(pattern) if !suppressed => {
                        return Some(Match {
                            end: self.pos,
                            pattern,
                            len: node.depth as usize,
                        })
                    }
                    _ => continue,
                }
            }

            if !self.started {
                self.started = true;
                // An empty haystack reports nothing, not even the empty pattern.
                self.lookahead = Some(self.haystack.next().map(|s| *Borrow::<S>::borrow(&s))?);
                if self.automaton.node(NodeId::ROOT).is_accept() {
                    self.pending = NodeId::ROOT;
                    continue;
                }
            }

            let symbol = self.next_symbol()?;
            self.state = self.automaton.next_state(self.state, symbol);
            self.pos += 1;
            let node = self.automaton.node(self.state);
            self.pending = if node.is_accept() { self.state } else { node.out };
        }
    }
}

impl<S, M, I> FusedIterator for Matches<'_, S, M, I>
where
    S: Symbol,
    M: ChildMap<S>,
    I: Iterator,
    I::Item: Borrow<S>,
{
}

impl<S: Symbol, M: ChildMap<S>> Automaton<S, M> {
    /// Returns a lazy iterator over all matches in `haystack`.
    ///
    /// The haystack is anything yielding symbols by value or by reference: a
    /// slice, a `Vec`, `str::chars()`, or any other iterator.
    ///
    /// ```
    /// use actrie::trie::Automaton;
    ///
    /// let automaton = Automaton::new([&b"AAA"[..]]).unwrap();
    /// let starts: Vec<usize> = automaton.find_iter(b"AAAA").map(|m| m.start()).collect();
    /// assert_eq!(starts, [0, 1]);
    /// ```
    pub fn find_iter<I>(&self, haystack: I) -> Matches<'_, S, M, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        Matches::new(self, haystack.into_iter())
    }

    /// Returns the match with the earliest start, preferring the shortest
    /// pattern when several start at the same index.
    ///
    /// The scan stops as soon as no later match could start earlier than the
    /// best one found.
    pub fn find<I>(&self, haystack: I) -> Option<Match>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut symbols = haystack.into_iter().peekable();
        symbols.peek()?;
        if let Some(pattern) = self.node(NodeId::ROOT).pattern {
            return Some(Match {
                end: 0,
                pattern,
                len: 0,
            });
        }

        let mut best: Option<Match> = None;
        let mut state = NodeId::ROOT;
        for (i, symbol) in symbols.enumerate() {
            let pos = i + 1;
            state = self.next_state(state, *Borrow::<S>::borrow(&symbol));
            let node = self.node(state);
            // The deepest accepting node at this end has the earliest start.
            let deepest = if node.is_accept() { state } else { node.out };
            if let Some(id) = deepest.get() {
                let accept = self.node(id);
                if let Some(pattern) = accept.pattern {
                    let found = Match {
                        end: pos,
                        pattern,
                        len: accept.depth as usize,
                    };
                    if best.map_or(true, |b| (found.start(), found.len) < (b.start(), b.len)) {
                        best = Some(found);
                    }
                }
            }
            // Any later match starts inside the prefix the current state spells.
            if best.is_some_and(|b| pos - node.depth as usize >= b.start()) {
                break;
            }
        }
        best
    }

    /// Returns the start of the first match, or `haystack.len()` if there is
    /// none.
    pub fn search(&self, haystack: &[S]) -> usize {
        self.find(haystack).map_or(haystack.len(), |m| m.start())
    }

    /// True if any pattern occurs in `haystack`.
    pub fn is_match<I>(&self, haystack: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        self.find_iter(haystack).next().is_some()
    }
}
