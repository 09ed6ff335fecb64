use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Trait for types that can serve as edge labels in the trie.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: comparing and ordering edge labels in the sparse child map
/// - `Hash`: path lookups during invariant validation
/// - `Debug`: error messages and debug printing of nodes
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Symbol for T {}

/// Inline capacity of a collected pattern before it spills to the heap.
pub(crate) const INLINE_PATTERN: usize = 32;

/// A pattern copied out of the caller's buffer.
pub type PatternBuf<S> = SmallVec<[S; INLINE_PATTERN]>;

/// Trait for types that can be inserted as a pattern.
///
/// Implemented for common string and sequence types so that
/// [`Trie::insert`](super::Trie::insert) and the one-shot search functions
/// accept them directly. The symbols are always copied, so the automaton never
/// holds on to caller memory.
pub trait IntoPattern<S: Symbol> {
    /// Collects this pattern into a symbol buffer.
    fn collect_pattern(self) -> PatternBuf<S>;
}

/// Text patterns are split into `char`s.
macro_rules! text_patterns {
    ($($text:ty),* $(,)?) => {$(
        impl IntoPattern<char> for $text {
            fn collect_pattern(self) -> PatternBuf<char> {
                let text: &str = self.as_ref();
                text.chars().collect()
            }
        }
    )*};
}

text_patterns!(&str, &&str, String, &String, Box<str>, Cow<'_, str>);

impl<S: Symbol> IntoPattern<S> for &[S] {
    fn collect_pattern(self) -> PatternBuf<S> {
        PatternBuf::from_slice(self)
    }
}

impl<S: Symbol, const N: usize> IntoPattern<S> for &[S; N] {
    fn collect_pattern(self) -> PatternBuf<S> {
        PatternBuf::from_slice(self)
    }
}

impl<S: Symbol, const N: usize> IntoPattern<S> for [S; N] {
    fn collect_pattern(self) -> PatternBuf<S> {
        PatternBuf::from_slice(&self)
    }
}

impl<S: Symbol> IntoPattern<S> for &Vec<S> {
    fn collect_pattern(self) -> PatternBuf<S> {
        PatternBuf::from_slice(self)
    }
}

/// Long owned vectors hand over their allocation.
impl<S: Symbol> IntoPattern<S> for Vec<S> {
    fn collect_pattern(self) -> PatternBuf<S> {
        PatternBuf::from_vec(self)
    }
}

impl<S: Symbol> IntoPattern<S> for Box<[S]> {
    fn collect_pattern(self) -> PatternBuf<S> {
        PatternBuf::from_vec(self.into_vec())
    }
}

impl<S: Symbol> IntoPattern<S> for PatternBuf<S> {
    fn collect_pattern(self) -> PatternBuf<S> {
        self
    }
}
