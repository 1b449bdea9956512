//! Cache Module
//!
//! Provides a space-bounded cache with least recently used eviction.

mod entry;
mod footprint;
mod lru;
mod space;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use footprint::Footprint;
pub use lru::RecencyQueue;
pub use space::SpaceAccount;
pub use stats::CacheStats;
pub use store::{CacheFactory, LruCache};

// == Public Constants ==
/// Space limit used when none is given
pub const DEFAULT_SPACE_LIMIT: i64 = 100;

/// Name shown in the diagnostic dump of a plain cache
pub const DEFAULT_CACHE_NAME: &str = "LRUCache";
