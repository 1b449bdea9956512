//! Models for the command driver
//!
//! This module defines the values stored by the driver's cache and the
//! commands read from a script.

pub mod artifact;
pub mod command;

// Re-export commonly used types
pub use artifact::Artifact;
pub use command::Command;
