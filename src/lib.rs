//! Spacebound Cache - a space-bounded LRU cache
//!
//! Stores values of varying cost under a fixed space limit, discarding the
//! least recently used entries when room is needed.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use cache::{CacheStats, Footprint, LruCache};
pub use config::Config;
pub use session::Session;
