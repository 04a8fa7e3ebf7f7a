//! Entity storage with stable ids and tombstone removal
//!
//! Ids are handed out by `GameState::next_entity_id` and only ever grow, so the
//! slot list stays sorted by id and lookups are a binary search. Removing an
//! entity leaves a tombstone; `compact` drops tombstones without touching ids.

use serde::{Deserialize, Serialize};

/// Stable handle to an entity in an `Arena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Slot<T> {
    id: EntityId,
    value: Option<T>,
}

/// Owned collection of one entity kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a freshly allocated id.
    ///
    /// Ids must be inserted in increasing order.
    pub fn insert(&mut self, id: EntityId, value: T) -> EntityId {
        debug_assert!(
            self.slots.last().is_none_or(|s| s.id < id),
            "arena ids must be inserted in increasing order"
        );
        self.slots.push(Slot {
            id,
            value: Some(value),
        });
        id
    }

    fn slot_index(&self, id: EntityId) -> Option<usize> {
        self.slots.binary_search_by_key(&id, |s| s.id).ok()
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.slot_index(id)
            .and_then(|i| self.slots[i].value.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.slot_index(id)
            .and_then(|i| self.slots[i].value.as_mut())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Tombstone an entity. Returns the removed value, or `None` if it was
    /// already gone.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let index = self.slot_index(id)?;
        self.slots[index].value.take()
    }

    /// Snapshot of live ids in insertion order
    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots
            .iter()
            .filter_map(|s| s.value.as_ref().map(|v| (s.id, v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.slots
            .iter_mut()
            .filter_map(|s| s.value.as_mut().map(|v| (s.id, v)))
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tombstoned slots waiting for `compact`
    pub fn tombstones(&self) -> usize {
        self.slots.len() - self.len()
    }

    /// Drop tombstoned slots
    pub fn compact(&mut self) {
        self.slots.retain(|s| s.value.is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_of(values: &[&'static str]) -> Arena<&'static str> {
        let mut arena = Arena::new();
        for (i, v) in values.iter().enumerate() {
            arena.insert(EntityId(i as u32 + 1), *v);
        }
        arena
    }

    #[test]
    fn test_insert_and_get() {
        let arena = arena_of(&["a", "b", "c"]);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.get(EntityId(2)), Some(&"b"));
        assert_eq!(arena.get(EntityId(9)), None);
    }

    #[test]
    fn test_remove_leaves_tombstone() {
        let mut arena = arena_of(&["a", "b", "c"]);
        assert_eq!(arena.remove(EntityId(2)), Some("b"));
        assert_eq!(arena.remove(EntityId(2)), None);
        assert!(!arena.contains(EntityId(2)));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.tombstones(), 1);
        assert_eq!(arena.ids(), vec![EntityId(1), EntityId(3)]);
    }

    #[test]
    fn test_compact_keeps_ids_stable() {
        let mut arena = arena_of(&["a", "b", "c"]);
        arena.remove(EntityId(1));
        arena.compact();
        assert_eq!(arena.tombstones(), 0);
        assert_eq!(arena.get(EntityId(3)), Some(&"c"));
        assert_eq!(arena.get(EntityId(1)), None);

        // Ids keep growing after compaction
        arena.insert(EntityId(4), "d");
        assert_eq!(arena.ids(), vec![EntityId(2), EntityId(3), EntityId(4)]);
    }

    #[test]
    fn test_ids_snapshot_survives_removal_during_iteration() {
        let mut arena = arena_of(&["a", "b", "c", "d"]);
        for id in arena.ids() {
            if id.0 % 2 == 0 {
                arena.remove(id);
            }
        }
        assert_eq!(arena.ids(), vec![EntityId(1), EntityId(3)]);
    }

    #[test]
    fn test_iter_mut_skips_tombstones() {
        let mut arena = Arena::new();
        arena.insert(EntityId(1), 1);
        arena.insert(EntityId(2), 2);
        arena.remove(EntityId(1));
        for (_, v) in arena.iter_mut() {
            *v *= 10;
        }
        assert_eq!(arena.get(EntityId(2)), Some(&20));
    }
}
