//! One-shot searching: build an automaton, scan once, throw it away.
//!
//! Useful when a pattern set is searched for in a single corpus. To search
//! many corpora for the same patterns, build an [`Automaton`] once instead.

use std::borrow::Borrow;

use crate::error::BuildError;
use crate::trie::{Automaton, IntoPattern, Match, Symbol};

/// Builds an automaton holding a single pattern, with id 0.
///
/// ```
/// use actrie::search::make_aho_corasick;
///
/// let automaton = make_aho_corasick("abracadabra").unwrap();
/// assert!(automaton.is_match("xxabracadabra".chars()));
/// ```
pub fn make_aho_corasick<S: Symbol>(pattern: impl IntoPattern<S>) -> Result<Automaton<S>, BuildError<S>> {
    Automaton::new([pattern.collect_pattern()])
}

/// Returns the start of the first occurrence of `pattern` in `corpus`, or
/// `corpus.len()` if there is none.
///
/// ```
/// use actrie::search::aho_corasick_search;
///
/// let corpus: Vec<char> = "ABC ABCDAB ABCDABCDABDE".chars().collect();
/// assert_eq!(aho_corasick_search(&corpus, "ABCDABD").unwrap(), 15);
/// assert_eq!(aho_corasick_search(&corpus, "NOT FOUND").unwrap(), corpus.len());
/// ```
pub fn aho_corasick_search<S: Symbol>(
    corpus: &[S],
    pattern: impl IntoPattern<S>,
) -> Result<usize, BuildError<S>> {
    Ok(make_aho_corasick(pattern)?.search(corpus))
}

/// Returns the start of the first occurrence of `pattern` in `corpus`, if any.
///
/// The corpus may be any sequence of symbols, borrowed or owned.
pub fn aho_corasick_find<S, I>(corpus: I, pattern: impl IntoPattern<S>) -> Result<Option<usize>, BuildError<S>>
where
    S: Symbol,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    Ok(make_aho_corasick(pattern)?.find(corpus).map(|m| m.start()))
}

/// Returns every occurrence of every pattern in `corpus`, in scan order.
///
/// Pattern ids are the positions of the patterns in `patterns`.
///
/// ```
/// use actrie::search::find_all;
///
/// let found = find_all(b"GATTACA", [&b"TA"[..], &b"A"[..]]).unwrap();
/// let spans: Vec<_> = found.iter().map(|m| (m.range(), m.pattern.index())).collect();
/// assert_eq!(spans, [(1..2, 1), (3..5, 0), (4..5, 1), (6..7, 1)]);
/// ```
pub fn find_all<S, I, P>(corpus: I, patterns: impl IntoIterator<Item = P>) -> Result<Vec<Match>, BuildError<S>>
where
    S: Symbol,
    I: IntoIterator,
    I::Item: Borrow<S>,
    P: IntoPattern<S>,
{
    Ok(Automaton::new(patterns)?.find_iter(corpus).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn single_pattern_scenarios() {
        assert_eq!(aho_corasick_search(&chars("ANPANMANAP"), "ANPANMAN").unwrap(), 0);
        assert_eq!(
            aho_corasick_search(&chars("ABC ABCDAB ABCDABCDABDE"), "ABCDABD").unwrap(),
            15
        );
        assert_eq!(aho_corasick_search(&chars("abracadabra"), "abracadabra").unwrap(), 0);
        assert_eq!(aho_corasick_search(&chars("AAAAAAAA"), "NOT FOUND").unwrap(), 8);
        assert_eq!(aho_corasick_search(&chars("x"), "").unwrap(), 0);
    }

    #[test]
    fn find_takes_any_iterator() {
        assert_eq!(aho_corasick_find("MAN THE MAN".chars(), "THE").unwrap(), Some(4));
        assert_eq!(aho_corasick_find(b"NOW IS THE", b"NEND").unwrap(), None);
        assert_eq!(aho_corasick_find(vec![3u16, 1, 4, 1, 5], [1u16, 5]).unwrap(), Some(3));
    }

    #[test]
    fn long_pattern_after_a_run_of_filler() {
        let pattern = concat!(
            "GATACACCTACCTTCACCAGTTACTCTATGCACTAGGTGCGCCAGGCCCATGCACAAGGGCTTGAGTGGATGGGAAGGA",
            "TGTGCCCTAGTGATGGCAGCATAAGCTACGCAGAGAAGTTCCAGGGCAGAGTCACCATGACCAGGGACACATCCACGAG",
            "CACAGCCTACATGGAGCTGAGCAGCCTGAGATCTGAAGACACGGCCATGTATTACTGTGGGAGAGATGTCTGGAGTGGT",
            "TATTATTGCCCCGGTAATATTACTACTACTACTACTACATGGACGTCTGGGGCAAAGGGACCACG",
        );
        let corpus = format!("{}{pattern}", "a".repeat(8));
        assert_eq!(aho_corasick_search(corpus.as_bytes(), pattern.as_bytes()).unwrap(), 8);
    }

    #[test]
    fn all_matches_overlap() {
        let found = find_all("AAAA".chars(), ["AAA"]).unwrap();
        let starts: Vec<_> = found.iter().map(|m| (m.start(), m.len)).collect();
        assert_eq!(starts, [(0, 3), (1, 3)]);
    }

    #[test]
    fn empty_corpus_finds_nothing() {
        assert_eq!(aho_corasick_search::<char>(&[], "").unwrap(), 0);
        assert_eq!(aho_corasick_find("".chars(), "").unwrap(), None);
        assert!(find_all("".chars(), ["", "a"]).unwrap().is_empty());
    }

    #[test]
    fn pattern_longer_than_corpus() {
        assert_eq!(aho_corasick_search(&chars("ANPAN"), "ANPANMAN").unwrap(), 5);
    }
}
