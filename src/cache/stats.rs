//! Cache Statistics Module
//!
//! Tracks cache behaviour: hits, misses, evictions and rejected inserts.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing how a cache has been used.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of lookups that found their key
    pub hits: u64,
    /// Number of lookups that did not find their key
    pub misses: u64,
    /// Number of entries dropped to make room or honor a smaller limit
    pub evictions: u64,
    /// Number of puts whose value was larger than the whole cache
    pub rejections: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Space used by the live entries
    pub current_space: i64,
    /// Maximum space allowed
    pub space_limit: i64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Rejection ==
    /// Increments the counter of values too large to store.
    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    // == Snapshot ==
    /// Copies the counters and fills in the current occupancy.
    pub fn snapshot(&self, total_entries: usize, current_space: i64, space_limit: i64) -> Self {
        Self {
            total_entries,
            current_space,
            space_limit,
            ..self.clone()
        }
    }
}
