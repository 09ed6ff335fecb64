//! # actrie
//!
//! Multi-pattern substring search over arbitrary symbol sequences, using the
//! [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! algorithm.
//!
//! The patterns are stored in a prefix tree whose nodes also carry failure
//! links (the longest proper suffix that is still a path in the tree) and
//! output links (the longest such suffix that is a whole pattern). A haystack
//! is scanned in one left-to-right pass, reporting every occurrence of every
//! pattern, overlapping ones included.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type
//!   implementing [`Symbol`](trie::Symbol)
//! - **Two phases**: a mutable [`Trie`](trie::Trie) is frozen into an immutable
//!   [`Automaton`](trie::Automaton) that can be shared between threads
//! - **Lazy**: matches are produced by an iterator, so a scan can stop early
//! - **Byte tables**: [`ByteAutomaton`](trie::ByteAutomaton) uses a 256-slot
//!   transition table per node
//!
//! ## Quick Start
//!
//! ```
//! use actrie::trie::Automaton;
//!
//! let automaton = Automaton::new(["he", "she", "his", "hers"]).unwrap();
//! let found: Vec<(usize, usize)> = automaton
//!     .find_iter("ahishers".chars())
//!     .map(|m| (m.start(), m.pattern.index()))
//!     .collect();
//! assert_eq!(found, [(1, 2), (3, 1), (4, 0), (4, 3)]);
//! ```
//!
//! For a single pattern searched once, the one-shot functions in [`search`]
//! build and discard the automaton for you:
//!
//! ```
//! use actrie::search::aho_corasick_search;
//!
//! let corpus: Vec<char> = "ANPANMANAP".chars().collect();
//! assert_eq!(aho_corasick_search(&corpus, "ANPANMAN").unwrap(), 0);
//! ```
//!
//! ## Building Incrementally
//!
//! ```
//! use actrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert(vec![1u32, 2, 3]).unwrap();
//! trie.insert(vec![2u32, 3]).unwrap();
//! trie.finalize();
//! trie.validate().unwrap();
//!
//! let automaton = trie.freeze();
//! let ends: Vec<usize> = automaton.find_iter([0u32, 1, 2, 3]).map(|m| m.end).collect();
//! assert_eq!(ends, [4, 4]);
//! ```

#![warn(missing_docs)]

/// Errors reported while building or validating a trie.
pub mod error;
/// Brute-force reference searcher.
pub mod naive;
/// One-shot search functions.
pub mod search;
/// Trie construction, the frozen automaton, and scanning.
pub mod trie;

pub use error::{BuildError, InvariantViolation};
pub use search::{aho_corasick_find, aho_corasick_search, find_all, make_aho_corasick};
pub use trie::{Automaton, AutomatonBuilder, Match, PatternId, Trie};
