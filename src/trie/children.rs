use std::fmt::Debug;

use super::node::NodeId;
use super::symbol::Symbol;

/// Edge storage of a trie node: a map from symbol to child id.
///
/// Iteration order must be deterministic so that breadth-first link
/// construction and debug output are repeatable.
pub trait ChildMap<S: Symbol>: Clone + Debug + Default {
    /// Returns the child reached by edge `symbol`, if any.
    fn get(&self, symbol: S) -> Option<NodeId>;

    /// Adds the edge `symbol -> child`.
    ///
    /// Callers guarantee the edge is not already present.
    fn insert(&mut self, symbol: S, child: NodeId);

    /// Iterates over all edges in a deterministic order.
    fn iter(&self) -> impl Iterator<Item = (S, NodeId)> + '_;

    /// Returns the number of edges.
    fn len(&self) -> usize;

    /// True if the node has no outgoing edges.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Searching a `Many` vector switches from a linear scan to binary search
/// beyond this many edges.
const LINEAR_SCAN_MAX: usize = 16;

/// A compact sorted map of children that doesn't allocate until there are at
/// least three edges.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Children<S: Symbol> {
    /// No children.
    #[default]
    None,
    /// Exactly one child (symbol, node).
    One((S, NodeId)),
    /// Exactly two children, sorted by symbol.
    Two((S, NodeId, S, NodeId)),
    /// Three or more children stored in a vector sorted by symbol.
    Many(Vec<(S, NodeId)>),
}

impl<S: Symbol> Children<S> {
    /// Gets the edge at the specified index in symbol order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(S, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((s1, n1, s2, n2)) => match index {
                0 => Some((*s1, *n1)),
                1 => Some((*s2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }
}

impl<S: Symbol> ChildMap<S> for Children<S> {
    #[inline]
    fn get(&self, symbol: S) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((s, node)) => (*s == symbol).then_some(*node),
            Children::Two((s1, n1, s2, n2)) => {
                if symbol == *s1 {
                    Some(*n1)
                } else if symbol == *s2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) if children.len() > LINEAR_SCAN_MAX => children
                .binary_search_by(|&(s, _)| s.cmp(&symbol))
                .ok()
                .map(|i| children[i].1),
            Children::Many(children) => {
                // Unrolled by 2 for load-level parallelism on small nodes.
                let chunks = children.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == symbol {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == symbol {
                        return Some(chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|&&(s, _)| s == symbol)
                    .map(|&(_, node)| node)
            }
        }
    }

    fn insert(&mut self, symbol: S, child: NodeId) {
        debug_assert!(self.get(symbol).is_none(), "insert: symbol already exists");
        let edge = (symbol, child);
        match self {
            Children::None => *self = Children::One(edge),
            Children::One((s1, n1)) => {
                *self = if symbol < *s1 {
                    Children::Two((symbol, child, *s1, *n1))
                } else {
                    Children::Two((*s1, *n1, symbol, child))
                }
            }
            Children::Two((s1, n1, s2, n2)) => {
                let mut v = vec![(*s1, *n1), (*s2, *n2), edge];
                v.sort_by_key(|&(s, _)| s);
                *self = Children::Many(v)
            }
            Children::Many(children) => {
                let pos = children.partition_point(|&(s, _)| s < symbol);
                children.insert(pos, edge);
            }
        }
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = (S, NodeId)> + '_ {
        ChildIter {
            children: self,
            index: 0,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }
}

/// An iterator over the edges of a [`Children`] map, in symbol order.
#[derive(Clone)]
pub struct ChildIter<'c, S: Symbol> {
    children: &'c Children<S>,
    index: usize,
}

impl<S: Symbol> Iterator for ChildIter<'_, S> {
    type Item = (S, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next = self.children.get_index(self.index)?;
        self.index += 1;
        Some(next)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<S: Symbol> ExactSizeIterator for ChildIter<'_, S> {}

#[cfg(test)]
mod test {
    use super::*;

    fn id(i: u32) -> NodeId {
        NodeId::new(i as usize)
    }

    #[test]
    fn no_children() {
        let c = Children::<char>::None;
        assert_eq!(c.iter().next(), None);
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert_eq!(c.get('a'), None);
    }

    #[test]
    fn one_child() {
        let mut c = Children::default();
        c.insert('a', id(1));
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![('a', id(1))]);
        assert_eq!(c.get('a'), Some(id(1)));
        assert_eq!(c.get('b'), None);
    }

    #[test]
    fn two_children_are_sorted() {
        let mut c = Children::default();
        c.insert('b', id(1));
        c.insert('a', id(2));
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![('a', id(2)), ('b', id(1))]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn three_children_are_sorted() {
        let mut c = Children::default();
        c.insert('c', id(1));
        c.insert('a', id(2));
        c.insert('b', id(3));
        assert!(matches!(c, Children::Many(_)));
        assert_eq!(
            c.iter().collect::<Vec<_>>(),
            vec![('a', id(2)), ('b', id(3)), ('c', id(1))]
        );
        assert_eq!(c.get('b'), Some(id(3)));
    }

    #[test]
    fn a_thousand_children() {
        let mut c = Children::default();
        let symbols: Vec<char> = (0..).filter_map(char::from_u32).take(1000).collect();
        // Insert in reverse to exercise sorted insertion.
        for (i, &s) in symbols.iter().enumerate().rev() {
            c.insert(s, id(i as u32 + 1));
        }
        assert_eq!(c.len(), 1000);
        for (i, &s) in symbols.iter().enumerate() {
            assert_eq!(c.get(s), Some(id(i as u32 + 1)));
        }
        assert!(c.iter().map(|(s, _)| s).is_sorted());
        assert_eq!(c.get(char::from_u32(5000).unwrap()), None);
        assert_eq!(c.iter().count(), 1000);
    }
}
