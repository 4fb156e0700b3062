//! PhoneNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of digits every stored phone number must have.
pub const PHONE_LENGTH: usize = 12;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly [`PHONE_LENGTH`] ASCII digits, with no
/// formatting characters. Anything else is rejected at construction.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("380501234567").unwrap();
/// assert_eq!(phone.as_str(), "380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value contains anything
    /// other than ASCII digits or its length is not 12.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Parse an optional phone field. Empty input means "no phone".
    pub fn parse_optional(phone: &str) -> Result<Option<Self>, ValidationError> {
        if phone.is_empty() {
            return Ok(None);
        }
        Self::new(phone).map(Some)
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
