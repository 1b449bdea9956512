//! Space Accounting Module
//!
//! Tracks how much of the cache budget is in use.

// == Space Account ==
/// Budget bookkeeping for a cache.
///
/// `current` is adjusted incrementally, once per insert, removal or update,
/// and always equals the sum of the footprints of the live entries.
/// A zero or negative `limit` is legal; such a cache can only hold entries
/// with a zero footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceAccount {
    current: i64,
    limit: i64,
}

impl SpaceAccount {
    // == Constructor ==
    /// Creates an empty account with the given limit.
    pub fn new(limit: i64) -> Self {
        Self { current: 0, limit }
    }

    /// Returns the space currently charged.
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Returns the maximum space allowed.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    // == Set Limit ==
    /// Replaces the limit without touching the charged space.
    pub fn set_limit(&mut self, limit: i64) {
        self.limit = limit;
    }

    // == Charge / Release ==
    /// Accounts for a newly inserted entry.
    pub fn charge(&mut self, footprint: i64) {
        self.current += footprint;
    }

    /// Accounts for a removed entry.
    pub fn release(&mut self, footprint: i64) {
        self.current -= footprint;
    }

    /// Accounts for an entry whose footprint changed in place.
    pub fn adjust(&mut self, old: i64, new: i64) {
        self.current += new - old;
    }

    // == Reset ==
    /// Drops all charges, as when the cache is flushed.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    // == Fits ==
    /// Returns true if `extra` more units stay within the limit.
    pub fn fits(&self, extra: i64) -> bool {
        self.current + extra <= self.limit
    }

    /// Returns true if replacing an `old` footprint by a `new` one stays
    /// within the limit.
    pub fn fits_replacement(&self, old: i64, new: i64) -> bool {
        self.current - old + new <= self.limit
    }

    /// Returns true if nothing of this size could ever be stored.
    pub fn exceeds_limit(&self, footprint: i64) -> bool {
        footprint > self.limit
    }

    // == Filling Ratio ==
    /// Percentage of the limit currently in use.
    pub fn filling_ratio(&self) -> f64 {
        self.current as f64 * 100.0 / self.limit as f64
    }
}
