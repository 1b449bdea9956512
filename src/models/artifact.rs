//! Artifact value stored by the command driver

use std::fmt;

use serde::Serialize;

use crate::cache::Footprint;

/// A derived artifact with an explicit cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Textual content
    pub text: String,
    /// Space the artifact occupies in the cache
    pub cost: u32,
}

impl Artifact {
    /// Creates a new Artifact
    pub fn new(text: impl Into<String>, cost: u32) -> Self {
        Self {
            text: text.into(),
            cost,
        }
    }
}

impl Footprint for Artifact {
    fn footprint_cost(&self) -> u32 {
        self.cost
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.cost)
    }
}
