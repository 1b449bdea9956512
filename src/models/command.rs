//! Cache commands read from a script
//!
//! One command per line, words separated by whitespace.

use std::str::FromStr;

use crate::error::{CommandError, Result};

/// A single cache command.
///
/// # Syntax
/// - `put <key> <text> [cost]`
/// - `get <key>`, `peek <key>`, `remove <key>`
/// - `flush [key]`
/// - `limit <n>`
/// - `oldest`, `ratio`, `dump`, `stats`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, text: String, cost: u32 },
    Get { key: String },
    Peek { key: String },
    Remove { key: String },
    Flush { key: Option<String> },
    Limit { limit: i64 },
    Oldest,
    Ratio,
    Dump,
    Stats,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();

        let command = match name.to_ascii_lowercase().as_str() {
            "put" => {
                let key = required(&mut words, "put", "key")?;
                let text = required(&mut words, "put", "text")?;
                let cost = match words.next() {
                    Some(value) => parse_number(value, "cost")?,
                    None => 1,
                };
                Command::Put { key, text, cost }
            }
            "get" => Command::Get {
                key: required(&mut words, "get", "key")?,
            },
            "peek" => Command::Peek {
                key: required(&mut words, "peek", "key")?,
            },
            "remove" => Command::Remove {
                key: required(&mut words, "remove", "key")?,
            },
            "flush" => Command::Flush {
                key: words.next().map(str::to_string),
            },
            "limit" => {
                let value = required(&mut words, "limit", "limit")?;
                Command::Limit {
                    limit: parse_number(&value, "limit")?,
                }
            }
            "oldest" => Command::Oldest,
            "ratio" => Command::Ratio,
            "dump" => Command::Dump,
            "stats" => Command::Stats,
            _ => return Err(CommandError::UnknownCommand(name.to_string())),
        };

        if words.next().is_some() {
            return Err(CommandError::TooManyArguments(command.name()));
        }
        Ok(command)
    }
}

impl Command {
    /// The keyword introducing this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Put { .. } => "put",
            Command::Get { .. } => "get",
            Command::Peek { .. } => "peek",
            Command::Remove { .. } => "remove",
            Command::Flush { .. } => "flush",
            Command::Limit { .. } => "limit",
            Command::Oldest => "oldest",
            Command::Ratio => "ratio",
            Command::Dump => "dump",
            Command::Stats => "stats",
        }
    }
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String> {
    words
        .next()
        .map(str::to_string)
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn parse_number<T: FromStr>(value: &str, argument: &'static str) -> Result<T> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}
