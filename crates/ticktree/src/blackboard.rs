//! Slot-partitioned key/value store for out-of-band communication.
//!
//! Nodes and tree instances that need to exchange data outside the tree
//! structure do so through a [`Blackboard`]. The store is an explicitly
//! constructed value owned by the host (typically embedded in, or used as,
//! the context type `C`) rather than ambient global state, and it carries no
//! locking: correctness relies on the host's single tick thread.

use std::any::Any;
use std::collections::HashMap;

type Slot = HashMap<String, Box<dyn Any + Send>>;

/// An ordered collection of independent string-keyed mappings ("slots").
///
/// Slots are created lazily up to the highest index ever written and never
/// shrink. Entries persist independently of any tree's lifetime; a
/// collaborator that no longer needs a value must [`clear`](Blackboard::clear)
/// it explicitly.
#[derive(Default)]
pub struct Blackboard {
    slots: Vec<Slot>,
}

impl Blackboard {
    /// Creates an empty blackboard with no slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key` in the given slot, creating intervening
    /// empty slots as needed.
    pub fn set(&mut self, key: impl Into<String>, value: impl Any + Send, slot: usize) {
        if self.slots.len() <= slot {
            self.slots.resize_with(slot + 1, Slot::default);
        }
        self.slots[slot].insert(key.into(), Box::new(value));
    }

    /// Returns a copy of the stored value, or `default`.
    ///
    /// An absent slot, an absent key, and a stored value of a different type
    /// all resolve to `default`; lookups never fail.
    pub fn get<T: Any + Clone>(&self, key: &str, slot: usize, default: T) -> T {
        self.slots
            .get(slot)
            .and_then(|entries| entries.get(key))
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
            .unwrap_or(default)
    }

    /// Removes `key` from the given slot, reporting whether it existed.
    pub fn clear(&mut self, key: &str, slot: usize) -> bool {
        self.slots
            .get_mut(slot)
            .is_some_and(|entries| entries.remove(key).is_some())
    }

    /// Number of slots created so far.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_stored_value() {
        let mut board = Blackboard::new();
        board.set("k", 5i32, 0);
        assert_eq!(board.get("k", 0, -1), 5);
    }

    #[test]
    fn missing_key_resolves_to_default() {
        let mut board = Blackboard::new();
        board.set("k", 5i32, 0);
        assert_eq!(board.get("missing", 0, -1), -1);
        // Absent slot behaves the same as an absent key.
        assert_eq!(board.get("k", 3, -1), -1);
    }

    #[test]
    fn type_mismatch_resolves_to_default() {
        let mut board = Blackboard::new();
        board.set("k", "text".to_string(), 0);
        assert_eq!(board.get("k", 0, -1i32), -1);
    }

    #[test]
    fn clear_reports_whether_key_existed() {
        let mut board = Blackboard::new();
        board.set("k", 5i32, 0);

        assert!(board.clear("k", 0));
        assert!(!board.clear("k", 0));
        assert!(!board.clear("k", 9));
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut board = Blackboard::new();
        board.set("k", 1i32, 0);
        board.set("k", 2i32, 0);
        assert_eq!(board.get("k", 0, -1), 2);
    }

    #[test]
    fn slots_grow_sparsely_to_highest_written_index() {
        let mut board = Blackboard::new();
        assert_eq!(board.slot_count(), 0);

        board.set("k", true, 4);
        assert_eq!(board.slot_count(), 5);
        assert!(board.get("k", 4, false));
        // Intervening slots exist but are empty.
        assert!(!board.get("k", 2, false));
    }
}
