//! Recency Queue Module
//!
//! Doubly-linked recency ordering of cache entries, stored in an arena.

use crate::cache::CacheEntry;

// == Recency Queue ==
/// Orders live entries from most recently used (head) to least recently
/// used (tail).
///
/// Entries live in `slots` and are addressed by their slot index, which
/// stays stable for the lifetime of the entry. Freed slots are recycled
/// through `free`. Every timestamp handed out comes from `clock`, so
/// following `next` from the head always yields strictly decreasing stamps.
#[derive(Debug, Clone)]
pub struct RecencyQueue<K, V> {
    slots: Vec<Option<CacheEntry<K, V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    clock: u64,
}

impl<K, V> RecencyQueue<K, V> {
    // == Constructor ==
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            clock: 0,
        }
    }

    // == Insert ==
    /// Stores the entry in a free slot and pushes it at the head.
    ///
    /// Returns the slot index addressing the entry from now on.
    pub fn insert(&mut self, entry: CacheEntry<K, V>) -> usize {
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        self.push_head(slot);
        slot
    }

    // == Remove ==
    /// Unlinks the entry at `slot` and releases the slot.
    pub fn remove(&mut self, slot: usize) -> Option<CacheEntry<K, V>> {
        self.slots.get(slot)?.as_ref()?;
        self.unlink(slot);
        let entry = self.slots[slot].take();
        self.free.push(slot);
        self.len -= 1;
        entry
    }

    // == Move To Head ==
    /// Marks the entry as just used: assigns a fresh timestamp and moves it
    /// to the head. An entry already at the head only gets the new stamp.
    pub fn move_to_head(&mut self, slot: usize) {
        if self.head == Some(slot) {
            let stamp = self.tick();
            if let Some(entry) = self.entry_mut(slot) {
                entry.timestamp = stamp;
            }
            return;
        }
        self.unlink(slot);
        self.push_head(slot);
    }

    // == Push Head ==
    /// Links an unlinked slot in front of the current head.
    pub(crate) fn push_head(&mut self, slot: usize) {
        let stamp = self.tick();
        let old_head = self.head;

        let Some(entry) = self.entry_mut(slot) else {
            return;
        };
        entry.timestamp = stamp;
        entry.prev = None;
        entry.next = old_head;

        match old_head {
            Some(head_slot) => {
                if let Some(head) = self.entry_mut(head_slot) {
                    head.prev = Some(slot);
                }
            }
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    // == Unlink ==
    /// Detaches the slot from its neighbours, leaving it stored but unlinked.
    pub(crate) fn unlink(&mut self, slot: usize) {
        let (prev, next) = match self.entry_mut(slot) {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return,
        };

        match prev {
            Some(prev_slot) => {
                if let Some(prev_entry) = self.entry_mut(prev_slot) {
                    prev_entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_slot) => {
                if let Some(next_entry) = self.entry_mut(next_slot) {
                    next_entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    // == Accessors ==
    /// Returns the entry stored at `slot`, if the slot is live.
    pub fn entry(&self, slot: usize) -> Option<&CacheEntry<K, V>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Mutable access to the entry stored at `slot`.
    pub fn entry_mut(&mut self, slot: usize) -> Option<&mut CacheEntry<K, V>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Slot of the most recently used entry.
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Slot of the least recently used entry.
    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Most recently used entry.
    pub fn head_entry(&self) -> Option<&CacheEntry<K, V>> {
        self.head.and_then(|slot| self.entry(slot))
    }

    /// Least recently used entry.
    pub fn tail_entry(&self) -> Option<&CacheEntry<K, V>> {
        self.tail.and_then(|slot| self.entry(slot))
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every entry. The clock keeps running so stamps stay unique
    /// across flushes.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iteration ==
    /// Walks entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            queue: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Walks entries from least to most recently used.
    pub fn iter_from_tail(&self) -> Iter<'_, K, V> {
        Iter {
            queue: self,
            cursor: self.tail,
            forward: false,
        }
    }

    fn tick(&mut self) -> u64 {
        let stamp = self.clock;
        self.clock += 1;
        stamp
    }
}

// == Queue Iterator ==
/// Iterator following the queue links in one direction.
pub struct Iter<'a, K, V> {
    queue: &'a RecencyQueue<K, V>,
    cursor: Option<usize>,
    forward: bool,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a CacheEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.queue.entry(self.cursor?)?;
        self.cursor = if self.forward { entry.next } else { entry.prev };
        Some(entry)
    }
}
