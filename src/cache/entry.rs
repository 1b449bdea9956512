//! Cache Entry Module
//!
//! Defines the record stored for every live key in the cache.

// == Cache Entry ==
/// A single cache entry together with its position in the recency queue.
///
/// `prev` and `next` are slot indices into the queue arena, not owning links.
/// `prev` points towards the most recently used end, `next` towards the
/// least recently used end.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// The key identity established by the first insert
    pub key: K,
    /// The stored value
    pub value: V,
    /// Space this entry consumes in the cache budget
    pub footprint: i64,
    /// Recency stamp, larger is more recent
    pub timestamp: u64,
    /// Slot of the more recently used neighbour
    pub prev: Option<usize>,
    /// Slot of the less recently used neighbour
    pub next: Option<usize>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry. The timestamp is assigned when the entry
    /// is pushed onto the queue.
    pub fn new(key: K, value: V, footprint: i64) -> Self {
        Self {
            key,
            value,
            footprint,
            timestamp: 0,
            prev: None,
            next: None,
        }
    }

    // == Replace Value ==
    /// Swaps in a new value and footprint, returning the previous footprint.
    pub fn replace(&mut self, value: V, footprint: i64) -> i64 {
        self.value = value;
        std::mem::replace(&mut self.footprint, footprint)
    }
}
