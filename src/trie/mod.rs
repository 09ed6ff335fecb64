/// Trait for types that can serve as trie edge labels, and pattern conversion.
pub mod symbol;
/// Sparse child map and the trait all child maps implement.
pub mod children;
/// Direct-indexed child table for bytes.
pub mod dense;
/// Node ids, pattern ids and the read-only node view.
pub mod node;
/// The mutable trie, link construction, and the automaton builder.
pub mod builder;
/// The frozen automaton.
pub mod automaton;
/// Match events and the scan loop.
pub mod scanner;

pub use automaton::{Automaton, ByteAutomaton};
pub use builder::{AutomatonBuilder, ByteTrie, Config, EmptyMatches, Trie};
pub use children::{ChildMap, Children};
pub use dense::ByteTable;
pub use node::{NodeId, NodeRef, PatternId};
pub use scanner::{Match, Matches};
pub use symbol::{IntoPattern, PatternBuf, Symbol};
