//! Command Session
//!
//! Executes cache commands against an artifact cache and renders a textual
//! response for each.

use tracing::warn;

use crate::cache::LruCache;
use crate::config::Config;
use crate::models::{Artifact, Command};

/// Response printed for a lookup that found nothing.
pub const NIL: &str = "(nil)";

// == Session ==
/// Owns a cache of artifacts and applies commands to it one at a time.
#[derive(Debug)]
pub struct Session {
    /// The driven cache
    pub cache: LruCache<String, Artifact>,
}

impl Session {
    /// Creates a new Session around the given cache.
    pub fn new(cache: LruCache<String, Artifact>) -> Self {
        Self { cache }
    }

    /// Creates a new Session from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(LruCache::named(config.cache_name.clone(), config.space_limit))
    }

    // == Run Line ==
    /// Parses and executes one script line.
    ///
    /// Blank lines and `#` comments produce no response. Malformed lines
    /// produce an `error: ...` response and leave the cache untouched.
    pub fn run_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        match line.parse::<Command>() {
            Ok(command) => Some(self.execute(command)),
            Err(err) => {
                warn!("Skipping line {:?}: {}", line, err);
                Some(format!("error: {}", err))
            }
        }
    }

    // == Execute ==
    /// Applies a command and returns its response.
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Put { key, text, cost } => {
                self.cache.put(key, Artifact::new(text, cost));
                "OK".to_string()
            }
            Command::Get { key } => render(self.cache.get(&key)),
            Command::Peek { key } => render(self.cache.peek(&key)),
            Command::Remove { key } => render(self.cache.remove_key(&key).as_ref()),
            Command::Flush { key: Some(key) } => {
                self.cache.flush_key(&key);
                "OK".to_string()
            }
            Command::Flush { key: None } => {
                self.cache.flush();
                "OK".to_string()
            }
            Command::Limit { limit } => {
                self.cache.set_space_limit(limit);
                "OK".to_string()
            }
            Command::Oldest => self
                .cache
                .oldest_key()
                .cloned()
                .unwrap_or_else(|| NIL.to_string()),
            Command::Ratio => self.cache.to_string_filling_ratio(self.cache.name()),
            Command::Dump => self.cache.to_string().trim_end().to_string(),
            Command::Stats => serde_json::to_string(&self.cache.stats())
                .unwrap_or_else(|err| format!("error: {}", err)),
        }
    }
}

fn render(value: Option<&Artifact>) -> String {
    value.map_or_else(|| NIL.to_string(), Artifact::to_string)
}
