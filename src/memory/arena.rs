//! Generational slot arena for list nodes
//!
//! This module provides node storage with:
//! - Stable [`NodeId`] handles instead of raw pointers between nodes
//! - Vacant-slot reuse through an intrusive free list
//! - Generation counters so removed handles are rejected (use-after-free detection)
//!
//! A slot is occupied, vacant or retired. Removing a value bumps the slot's
//! generation; a later insert may reuse the slot, but any handle minted for
//! the previous occupant no longer matches and is reported as [`ArenaError::Stale`].
//! A slot whose generation reaches `u32::MAX` is retired when vacated and never
//! handed out again, so generations never wrap back onto an old handle.

use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Handle to a value stored in an [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index inside the arena
    pub fn index(self) -> u32 {
        self.index
    }

    /// Generation the slot had when this handle was created
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Errors from handle lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The index was never handed out by this arena
    #[error("Invalid handle: slot {index} was never allocated ({len} slots in arena)")]
    OutOfBounds { index: u32, len: usize },

    /// The slot was vacated (and possibly reused) since the handle was issued
    #[error("Use-after-free: node {index} (generation {generation}) has been removed")]
    Stale { index: u32, generation: u32 },
}

/// State of an arena slot
#[derive(Debug, Clone)]
enum SlotState<T> {
    Occupied(T),
    Vacant { next_free: Option<u32> },
    Retired,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}

/// The arena
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Create an arena with room for `capacity` values before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated (occupied, vacant and retired)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store a value, reusing the most recently vacated slot if there is one
    pub fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;

        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            self.free_head = match slot.state {
                SlotState::Vacant { next_free } => next_free,
                _ => unreachable!("free list points at a slot that is not vacant"),
            };
            slot.state = SlotState::Occupied(value);
            trace!(index, generation = slot.generation, "reused arena slot");
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        let index = u32::try_from(self.slots.len()).expect("arena exceeded u32::MAX slots");
        self.slots.push(Slot {
            generation: 0,
            state: SlotState::Occupied(value),
        });
        trace!(index, "allocated arena slot");
        NodeId {
            index,
            generation: 0,
        }
    }

    /// Remove a value, invalidating every handle to it
    pub fn remove(&mut self, id: NodeId) -> Result<T, ArenaError> {
        self.check(id)?;

        let slot = &mut self.slots[id.index as usize];
        let old = match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                let old = std::mem::replace(
                    &mut slot.state,
                    SlotState::Vacant {
                        next_free: self.free_head,
                    },
                );
                self.free_head = Some(id.index);
                trace!(index = id.index, generation, "vacated arena slot");
                old
            }
            None => {
                trace!(index = id.index, "retired arena slot");
                std::mem::replace(&mut slot.state, SlotState::Retired)
            }
        };
        self.len -= 1;

        match old {
            SlotState::Occupied(value) => Ok(value),
            _ => unreachable!("checked slot was not occupied"),
        }
    }

    /// Get a value (returns error if the handle is stale or unknown)
    pub fn get(&self, id: NodeId) -> Result<&T, ArenaError> {
        self.check(id)?;
        match &self.slots[id.index as usize].state {
            SlotState::Occupied(value) => Ok(value),
            _ => unreachable!("checked slot was not occupied"),
        }
    }

    /// Get a mutable value
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut T, ArenaError> {
        self.check(id)?;
        match &mut self.slots[id.index as usize].state {
            SlotState::Occupied(value) => Ok(value),
            _ => unreachable!("checked slot was not occupied"),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.check(id).is_ok()
    }

    /// Drop every value. Slots are kept (with bumped generations) for reuse,
    /// except those whose generation is exhausted, which are retired.
    pub fn clear(&mut self) {
        self.free_head = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let SlotState::Occupied(_) = slot.state {
                match slot.generation.checked_add(1) {
                    Some(generation) => slot.generation = generation,
                    None => {
                        slot.state = SlotState::Retired;
                        continue;
                    }
                }
            }
            if let SlotState::Retired = slot.state {
                continue;
            }
            slot.state = SlotState::Vacant {
                next_free: self.free_head,
            };
            self.free_head = Some(index as u32);
        }
        self.len = 0;
    }

    /// Iterate occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match &slot.state {
                SlotState::Occupied(value) => Some((
                    NodeId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    value,
                )),
                SlotState::Vacant { .. } | SlotState::Retired => None,
            })
    }

    fn check(&self, id: NodeId) -> Result<(), ArenaError> {
        let slot = self
            .slots
            .get(id.index as usize)
            .ok_or(ArenaError::OutOfBounds {
                index: id.index,
                len: self.slots.len(),
            })?;

        match slot.state {
            SlotState::Occupied(_) if slot.generation == id.generation => Ok(()),
            _ => Err(ArenaError::Stale {
                index: id.index,
                generation: id.generation,
            }),
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.get(a), Ok(&"a"));
        assert_eq!(arena.get(b), Ok(&"b"));
        assert_eq!(arena.len(), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let mut arena = Arena::new();
        let a = arena.insert(1);

        assert_eq!(arena.remove(a), Ok(1));
        assert!(arena.is_empty());
        assert_eq!(
            arena.get(a),
            Err(ArenaError::Stale {
                index: 0,
                generation: 0
            })
        );
        // Double remove is reported, not a panic
        assert!(arena.remove(a).is_err());
    }

    #[test]
    fn test_reused_slot_rejects_old_handle() {
        let mut arena = Arena::new();
        let old = arena.insert("old");
        arena.remove(old).unwrap();
        let new = arena.insert("new");

        assert_eq!(old.index(), new.index());
        assert_ne!(old.generation(), new.generation());
        assert!(!arena.contains(old));
        assert_eq!(arena.get(new), Ok(&"new"));
        assert_eq!(arena.capacity(), 1);
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..4).map(|n| arena.insert(n)).collect();
        arena.remove(ids[1]).unwrap();
        arena.remove(ids[3]).unwrap();

        assert_eq!(arena.insert(10).index(), 3);
        assert_eq!(arena.insert(11).index(), 1);
        assert_eq!(arena.insert(12).index(), 4);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut arena: Arena<u8> = Arena::new();
        let foreign = {
            let mut other = Arena::new();
            other.insert(0u8);
            other.insert(0u8)
        };
        arena.insert(7);

        assert_eq!(
            arena.get(foreign),
            Err(ArenaError::OutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_exhausted_generation_retires_slot() {
        let mut arena = Arena::new();
        let old = arena.insert("old");
        arena.slots[0].generation = u32::MAX;
        let old = NodeId {
            generation: u32::MAX,
            ..old
        };

        assert_eq!(arena.remove(old), Ok("old"));
        let new = arena.insert("new");

        assert_eq!(new.index(), 1);
        assert!(!arena.contains(old));
        assert!(arena.remove(old).is_err());
        assert_eq!(arena.capacity(), 2);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_clear_retires_exhausted_slots() {
        let mut arena = Arena::new();
        arena.insert('a');
        arena.insert('b');
        arena.slots[0].generation = u32::MAX;
        arena.clear();

        // Slot 0 is skipped; only slot 1 is reusable
        assert_eq!(arena.insert('c').index(), 1);
        assert_eq!(arena.insert('d').index(), 2);
        assert_eq!(arena.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec!['c', 'd']);
    }

    #[test]
    fn test_clear_keeps_slots_and_invalidates() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), 2);
        assert!(!arena.contains(a));
        assert!(!arena.contains(b));

        let c = arena.insert('c');
        assert_eq!(c.index(), 0);
        assert_eq!(arena.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec!['c']);
    }
}
