//! Configuration Module
//!
//! Handles loading the driver configuration from environment variables.

use std::env;

use crate::cache::{DEFAULT_CACHE_NAME, DEFAULT_SPACE_LIMIT};

/// Driver configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Space budget of the cache
    pub space_limit: i64,
    /// Name shown in ratio and dump output
    pub cache_name: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SPACE_LIMIT` - Cache space limit (default: 100)
    /// - `CACHE_NAME` - Cache name (default: LRUCache)
    pub fn from_env() -> Self {
        Self {
            space_limit: env::var("SPACE_LIMIT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_SPACE_LIMIT),
            cache_name: env::var("CACHE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CACHE_NAME.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            space_limit: DEFAULT_SPACE_LIMIT,
            cache_name: DEFAULT_CACHE_NAME.to_string(),
        }
    }
}
