//! Contact Book - an interactive command-line contact manager.
//!
//! Contacts (a name, one or more phone numbers and an optional birthday) are
//! kept in memory for the length of a session and managed through
//! line-oriented commands.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: The contact `Record`
//! - **book**: The insertion-ordered `AddressBook` and its pagination
//! - **services**: User-facing operations over the address book
//! - **cli**: Command parsing, rendering and the prompt loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use cli::{Command, Dispatcher};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Record;
pub use services::{ContactService, ContactServiceImpl};
