//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Name cannot be empty")]
    InvalidName,

    /// The provided phone number is not exactly 12 digits.
    #[error("Invalid phone number: {0} (must be exactly 12 digits)")]
    InvalidPhone(String),

    /// The provided birthday is not a valid YYYY-MM-DD date.
    #[error("Invalid birthday: {0} (must be a real date in YYYY-MM-DD format)")]
    InvalidBirthday(String),
}
