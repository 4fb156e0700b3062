//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so running
//! with an empty environment is fine.

use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "Enter a command >>> ";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contacts per page for `show in parts` (default: 2)
    pub page_size: usize,

    /// Command prompt text
    pub prompt: String,

    /// Print the command overview on startup (default: true)
    pub show_help: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PAGE_SIZE`: Contacts per page, at least 1 (default: 2)
    /// - `CONTACT_BOOK_PROMPT`: Command prompt (default: "Enter a command >>> ")
    /// - `CONTACT_BOOK_SHOW_HELP`: Print the overview on start (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy never prints to stdout.
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let show_help = Self::parse_env_bool("CONTACT_BOOK_SHOW_HELP", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            page_size,
            prompt,
            show_help,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: DEFAULT_PAGE_SIZE,
            prompt: DEFAULT_PROMPT.to_string(),
            show_help: true,
            log_level: "error".to_string(),
        }
    }
}
