use num_traits::Float;
use std::fmt::Debug;

use crate::data_structures::PathRecord;
use crate::{Error, Result};

/// A capacity-bounded binary min-heap of [`PathRecord`]s keyed by vertex identity
///
/// Alongside the heap array the structure keeps, for every vertex identity in
/// `0..capacity`, the slot that vertex currently occupies. This makes
/// membership tests O(1) and lets callers lower a vertex's priority knowing
/// only the vertex, not its heap slot.
///
/// At most one live entry exists per vertex, so the heap never holds more
/// than `capacity` records.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W>
where
    W: Float + Debug,
{
    /// Heap-ordered records: `entries[i] <= entries[2i+1], entries[2i+2]`
    entries: Vec<PathRecord<W>>,

    /// `positions[v]` is the slot of vertex `v` in `entries`, `None` when absent
    positions: Vec<Option<usize>>,
}

impl<W> IndexedMinHeap<W>
where
    W: Float + Debug,
{
    /// Creates an empty heap able to hold the vertex identities `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Returns the number of distinct vertex identities the heap accepts
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of records currently in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `vertex` currently has a live entry
    pub fn contains(&self, vertex: usize) -> bool {
        self.slot_of(vertex).is_some()
    }

    /// Returns the stored priority of `vertex`, if it is in the heap
    pub fn priority_of(&self, vertex: usize) -> Option<W> {
        self.slot_of(vertex).map(|slot| self.entries[slot].priority)
    }

    /// Records in heap-array order
    pub fn entries(&self) -> &[PathRecord<W>] {
        &self.entries
    }

    /// Inserts `record`, or lowers the priority of the vertex it names
    ///
    /// An existing entry is replaced only when `record.priority` is strictly
    /// smaller than the stored one; otherwise the call is a no-op and returns
    /// `Ok(false)`. Keys are never increased.
    ///
    /// Fails with [`Error::CapacityExceeded`] when a new vertex would not fit,
    /// and with [`Error::InvalidVertex`] when the vertex identity lies outside
    /// `0..capacity`.
    pub fn insert_or_decrease(&mut self, record: PathRecord<W>) -> Result<bool> {
        let slot = match self.slot_of(record.vertex) {
            Some(slot) => {
                if record.priority < self.entries[slot].priority {
                    self.entries[slot] = record;
                    slot
                } else {
                    return Ok(false);
                }
            }
            None => {
                if self.entries.len() == self.capacity() {
                    return Err(Error::CapacityExceeded {
                        capacity: self.capacity(),
                    });
                }
                if record.vertex >= self.capacity() {
                    return Err(Error::InvalidVertex(record.vertex));
                }
                let slot = self.entries.len();
                self.entries.push(record);
                self.positions[record.vertex] = Some(slot);
                slot
            }
        };

        // A lowered key can only break the relation with its parent
        self.sift_up(slot);
        debug_assert!(self.check_invariants());
        Ok(true)
    }

    /// Returns the record with the smallest priority without removing it
    pub fn peek_min(&self) -> Result<&PathRecord<W>> {
        self.entries.first().ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the record with the smallest priority
    pub fn extract_min(&mut self) -> Result<PathRecord<W>> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let min = self.entries.swap_remove(0);
        self.positions[min.vertex] = None;

        if let Some(root) = self.entries.first() {
            self.positions[root.vertex] = Some(0);
            self.sift_down(0);
        }

        debug_assert!(self.check_invariants());
        Ok(min)
    }

    /// Verifies the heap/position invariant
    ///
    /// Every entry must be indexed at its own slot, no absent vertex may have
    /// a slot, and every entry must be no smaller than its parent.
    pub fn check_invariants(&self) -> bool {
        if self.entries.len() > self.capacity() {
            return false;
        }

        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(slot, record)| self.positions.get(record.vertex) == Some(&Some(slot)));

        let live = self.positions.iter().filter(|slot| slot.is_some()).count();

        let ordered = (1..self.entries.len())
            .all(|slot| self.entries[(slot - 1) / 2].priority <= self.entries[slot].priority);

        indexed && live == self.entries.len() && ordered
    }

    fn slot_of(&self, vertex: usize) -> Option<usize> {
        self.positions.get(vertex).copied().flatten()
    }

    /// Exchanges two slots and re-points both vertices at their new slots
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].vertex] = Some(a);
        self.positions[self.entries[b].vertex] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].priority < self.entries[parent].priority {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;

            // Left wins ties: the right child must be strictly smaller
            let mut smallest = slot;
            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
