//! Brute-force substring search.
//!
//! Compares the pattern against every candidate position. It is slow and
//! obviously correct, which makes it the reference the automaton is tested
//! against.

use crate::trie::Symbol;

/// Returns the start of the first occurrence of `pattern`, or `corpus.len()`
/// if there is none.
///
/// An empty pattern matches at 0, unless the corpus is empty too.
///
/// ```
/// use actrie::naive::naive_search;
///
/// assert_eq!(naive_search(b"ANPANMANAP", b"ANPANMAN"), 0);
/// assert_eq!(naive_search(b"AAAAAAAA", b"NOT FOUND"), 8);
/// ```
pub fn naive_search<S: Symbol>(corpus: &[S], pattern: &[S]) -> usize {
    naive_find(corpus, pattern).unwrap_or(corpus.len())
}

/// Returns the start of the first occurrence of `pattern`, if any.
pub fn naive_find<S: Symbol>(corpus: &[S], pattern: &[S]) -> Option<usize> {
    if corpus.is_empty() {
        return None;
    }
    if pattern.is_empty() {
        return Some(0);
    }
    if corpus.len() < pattern.len() {
        return None;
    }
    (0..=corpus.len() - pattern.len()).find(|&i| matches_at(corpus, pattern, i))
}

/// Returns the start of every occurrence of `pattern`, overlapping ones
/// included, in increasing order.
///
/// An empty pattern matches at every position `0..=corpus.len()` of a
/// non-empty corpus.
pub fn naive_find_all<S: Symbol>(corpus: &[S], pattern: &[S]) -> Vec<usize> {
    if corpus.is_empty() {
        return Vec::new();
    }
    if pattern.is_empty() {
        return (0..=corpus.len()).collect();
    }
    if corpus.len() < pattern.len() {
        return Vec::new();
    }
    (0..=corpus.len() - pattern.len())
        .filter(|&i| matches_at(corpus, pattern, i))
        .collect()
}

/// Compares right to left, so mismatches near the end of the window are
/// found first.
fn matches_at<S: Symbol>(corpus: &[S], pattern: &[S], at: usize) -> bool {
    pattern
        .iter()
        .zip(&corpus[at..at + pattern.len()])
        .rev()
        .all(|(p, c)| p == c)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_first_occurrence() {
        assert_eq!(naive_search(b"ABC ABCDAB ABCDABCDABDE", b"ABCDABD"), 15);
        assert_eq!(naive_search(b"abracadabra", b"abracadabra"), 0);
        assert_eq!(naive_search(b"xxabra", b"abra"), 2);
    }

    #[test]
    fn not_found_returns_corpus_len() {
        assert_eq!(naive_search(b"AAAAAAAA", b"NOT FOUND"), 8);
        assert_eq!(naive_search(b"ANPAN", b"ANPANMAN"), 5);
        assert_eq!(naive_find(b"AAAAAAAA", b"AB"), None);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(naive_search(b"x", b""), 0);
        assert_eq!(naive_search::<u8>(&[], b""), 0);
        assert_eq!(naive_find::<u8>(&[], b""), None);
        assert_eq!(naive_find_all(b"ab", b""), [0, 1, 2]);
        assert!(naive_find_all::<u8>(&[], b"").is_empty());
    }

    #[test]
    fn find_all_includes_overlaps() {
        assert_eq!(naive_find_all(b"AAAA", b"AAA"), [0, 1]);
        assert_eq!(naive_find_all(b"abababa", b"aba"), [0, 2, 4]);
        assert!(naive_find_all(b"ab", b"abc").is_empty());
    }

    #[test]
    fn works_on_any_symbol() {
        let corpus: Vec<u32> = vec![7, 1, 2, 3, 1, 2];
        assert_eq!(naive_find_all(&corpus, &[1, 2]), [1, 4]);
    }
}
