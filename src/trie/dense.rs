//! Direct-indexed child table for byte alphabets.

use std::fmt;

use super::children::ChildMap;
use super::node::NodeId;

/// A 256-slot transition table: one slot per byte value.
///
/// Lookups are a single index operation. Unused slots hold [`NodeId::NONE`].
/// Iteration is in byte order, the same order the sparse
/// [`Children`](super::Children) map yields, so both produce identical
/// automata.
#[derive(Clone)]
pub struct ByteTable {
    slots: Box<[NodeId; 256]>,
    len: u16,
}

impl Default for ByteTable {
    fn default() -> Self {
        ByteTable {
            slots: Box::new([NodeId::NONE; 256]),
            len: 0,
        }
    }
}

impl fmt::Debug for ByteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl ChildMap<u8> for ByteTable {
    #[inline]
    fn get(&self, symbol: u8) -> Option<NodeId> {
        let id = self.slots[symbol as usize];
        (!id.is_none()).then_some(id)
    }

    #[inline]
    fn insert(&mut self, symbol: u8, child: NodeId) {
        let slot = &mut self.slots[symbol as usize];
        debug_assert!(slot.is_none(), "insert: byte {symbol:#04x} already exists");
        *slot = child;
        self.len += 1;
    }

    fn iter(&self) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        (0..=u8::MAX)
            .zip(self.slots.iter().copied())
            .filter(|(_, id)| !id.is_none())
    }

    #[inline]
    fn len(&self) -> usize {
        self.len as usize
    }
}
