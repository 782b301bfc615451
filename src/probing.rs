//! Open-addressing table with linear probing.

use crate::error::DictError;
use crate::hashing::BucketHash;
use crate::lookup::Lookup;

struct Slot {
    key: String,
    rank: u32,
}

/// Fixed-capacity hash table resolving collisions by linear probing.
///
/// Capacity is set at construction and never changes; there is no rehashing,
/// no deletion, and therefore no tombstones — `None` always means "never
/// occupied", which is what lets a search stop early.
///
/// The classic hazard of this layout is a full table: with no empty slot to
/// stop at, a naive scan for an absent key never terminates. Both `insert`
/// and `search` here bound their scan at `capacity` steps, so a full table
/// yields [`DictError::CapacityExhausted`] on insert and a miss on search
/// instead of a hang. Callers should still size the table well above the
/// expected entry count: probe runs lengthen sharply as the load factor
/// approaches 1.
pub struct ProbingTable {
    slots: Vec<Option<Slot>>,
    len: usize,
}

impl ProbingTable {
    /// Create a table with `capacity` slots. `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Occupied fraction, in `[0, 1]`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Write `(key, rank)` into the first empty slot at or after the home
    /// index `hash` selects, wrapping at the end of the table.
    ///
    /// Duplicate keys are not detected; a key inserted twice occupies two
    /// slots and a search finds the one earlier in probe order.
    pub fn insert(&mut self, key: &str, rank: u32, hash: BucketHash) -> Result<(), DictError> {
        if self.len == self.slots.len() {
            return Err(DictError::CapacityExhausted {
                capacity: self.slots.len(),
            });
        }
        let mut index = hash.index(key, self.slots.len());
        while self.slots[index].is_some() {
            index = (index + 1) % self.slots.len();
        }
        self.slots[index] = Some(Slot {
            key: key.to_string(),
            rank,
        });
        self.len += 1;
        Ok(())
    }

    /// Scan forward from the home index, counting one comparison per
    /// occupied slot visited, until an equal key (hit) or an empty slot
    /// (miss). The scan is bounded at `capacity` slots, so a completely
    /// full table reports a miss after one full sweep rather than looping.
    pub fn search(&self, key: &str, hash: BucketHash) -> Lookup {
        let capacity = self.slots.len();
        let mut index = hash.index(key, capacity);
        let mut comparisons = 0;
        for _ in 0..capacity {
            match &self.slots[index] {
                Some(slot) => {
                    comparisons += 1;
                    if slot.key == key {
                        return Lookup {
                            found: true,
                            comparisons,
                        };
                    }
                }
                None => break,
            }
            index = (index + 1) % capacity;
        }
        Lookup {
            found: false,
            comparisons,
        }
    }

    /// Rank stored with the first slot in probe order matching `key`, if any.
    pub fn rank(&self, key: &str, hash: BucketHash) -> Option<u32> {
        let capacity = self.slots.len();
        let mut index = hash.index(key, capacity);
        for _ in 0..capacity {
            match &self.slots[index] {
                Some(slot) if slot.key == key => return Some(slot.rank),
                Some(_) => index = (index + 1) % capacity,
                None => break,
            }
        }
        None
    }
}
