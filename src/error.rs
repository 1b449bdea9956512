//! Error types for the command driver
//!
//! Cache lookups never fail; only malformed script input does.

use thiserror::Error;

// == Command Error Enum ==
/// Errors raised while parsing a cache command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required argument was not supplied
    #[error("Missing argument for {command}: {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// More arguments than the command accepts
    #[error("Too many arguments for {0}")]
    TooManyArguments(&'static str),

    /// An argument that should be a number is not one
    #[error("Invalid number for {argument}: {value}")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for command parsing.
pub type Result<T> = std::result::Result<T, CommandError>;
