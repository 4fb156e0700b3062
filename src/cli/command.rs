//! Parsing of command lines typed at the prompt.
//!
//! Keywords are case-insensitive and arguments are separated by whitespace.
//! The parser only checks the shape of a line; field values are validated
//! later by the domain types.

use crate::error::{CommandError, CommandResult};
use once_cell::sync::Lazy;
use regex::Regex;

static ADD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:add)\s+(\w+)\s+(\S+)(?:\s+(\S+))?$").expect("Failed to compile add regex")
});

static REMOVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:remove)\s+(\w+)$").expect("Failed to compile remove regex"));

static FIND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:find)\s+(\w+)$").expect("Failed to compile find regex"));

static CHANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:change)\s+(\w+)\s+(\S+)\s+(\S+)$").expect("Failed to compile change regex")
});

pub const ADD_USAGE: &str = "add <name> <phone> [<YYYY-MM-DD>]";
pub const REMOVE_USAGE: &str = "remove <name>";
pub const FIND_USAGE: &str = "find <name or phone>";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Remove {
        name: String,
    },
    Find {
        token: String,
    },
    Change {
        name: String,
        old: String,
        new: String,
    },
    ShowAll,
    ShowInParts,
    Exit,
}

impl Command {
    /// Parse one line of user input.
    ///
    /// # Errors
    ///
    /// - `CommandError::Unknown` if the line starts with no known keyword.
    /// - `CommandError::Malformed` if a known command has the wrong arguments.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let line = line.trim();
        let normalized = line
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match normalized.as_str() {
            "hello" => return Ok(Command::Hello),
            "help" => return Ok(Command::Help),
            "show all" => return Ok(Command::ShowAll),
            "show in parts" => return Ok(Command::ShowInParts),
            "exit" | "close" | "good bye" => return Ok(Command::Exit),
            _ => {}
        }

        let keyword = normalized.split(' ').next().unwrap_or_default();
        match keyword {
            "add" => {
                let caps = ADD_RE.captures(line).ok_or(CommandError::Malformed {
                    command: "add",
                    usage: ADD_USAGE,
                })?;
                Ok(Command::Add {
                    name: caps[1].to_string(),
                    phone: caps[2].to_string(),
                    birthday: caps.get(3).map(|m| m.as_str().to_string()),
                })
            }
            "remove" => {
                let caps = REMOVE_RE.captures(line).ok_or(CommandError::Malformed {
                    command: "remove",
                    usage: REMOVE_USAGE,
                })?;
                Ok(Command::Remove {
                    name: caps[1].to_string(),
                })
            }
            "find" => {
                let caps = FIND_RE.captures(line).ok_or(CommandError::Malformed {
                    command: "find",
                    usage: FIND_USAGE,
                })?;
                Ok(Command::Find {
                    token: caps[1].to_string(),
                })
            }
            "change" => {
                let caps = CHANGE_RE.captures(line).ok_or(CommandError::Malformed {
                    command: "change",
                    usage: CHANGE_USAGE,
                })?;
                Ok(Command::Change {
                    name: caps[1].to_string(),
                    old: caps[2].to_string(),
                    new: caps[3].to_string(),
                })
            }
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}
