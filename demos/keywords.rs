//! Example: a keyword highlighter built on top of an Automaton.
//!
//! This shows how to wrap the raw match iterator in a small high-level API.
//! The `Keywords` struct keeps the keyword list next to the automaton, so
//! match ids can be turned back into words.
//!
//! Run with: cargo run --example keywords

use actrie::trie::{Automaton, Match};

struct Keywords<'k> {
    words: &'k [&'k str],
    automaton: Automaton<char>,
}

impl<'k> Keywords<'k> {
    fn new(words: &'k [&'k str]) -> Self {
        let automaton = Automaton::new(words).unwrap();
        Keywords { words, automaton }
    }

    /// Returns every keyword occurrence as `(char offset, keyword)`.
    fn occurrences(&self, text: &str) -> Vec<(usize, &'k str)> {
        self.automaton
            .find_iter(text.chars())
            .map(|m| (m.start(), self.words[m.pattern.index()]))
            .collect()
    }

    /// Wraps the leftmost, non-overlapping keyword occurrences in brackets.
    fn highlight(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut picked: Vec<Match> = self.automaton.find_iter(&chars).collect();
        picked.sort_by_key(|m| (m.start(), std::cmp::Reverse(m.len)));

        let mut out = String::with_capacity(text.len() + 2 * picked.len());
        let mut at = 0;
        for m in picked {
            if m.start() < at {
                continue;
            }
            out.extend(&chars[at..m.start()]);
            out.push('[');
            out.extend(&chars[m.range()]);
            out.push(']');
            at = m.end;
        }
        out.extend(&chars[at..]);
        out
    }
}

fn main() {
    let words = ["he", "she", "his", "hers", "usher"];
    let keywords = Keywords::new(&words);

    // Every occurrence, overlapping ones included
    println!("Occurrences:");
    for text in ["ushers", "this is his", "nothing here"] {
        println!("  {text:?}: {:?}", keywords.occurrences(text));
    }

    // Leftmost-longest highlighting
    println!("\nHighlighted:");
    for text in ["ushers", "she said his was hers"] {
        println!("  {}", keywords.highlight(text));
    }

    println!(
        "\nAutomaton: {} nodes, {} patterns, longest {}",
        keywords.automaton.node_count(),
        keywords.automaton.pattern_count(),
        keywords.automaton.max_pattern_len()
    );
}
