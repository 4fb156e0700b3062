//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A contact's date of birth.
///
/// Always holds a real calendar date. A missing birthday is expressed as
/// `Option<Birthday>::None` by the owner.
///
/// Birthdays on February 29 are celebrated on February 28 in years that
/// have no leap day.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("1990-05-20").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Wrap an already valid date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse an ISO `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not in
    /// `YYYY-MM-DD` form or names a date that does not exist (month 13,
    /// February 30 and so on).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !Self::has_iso_shape(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Parse an optional birthday field. Empty input means "no birthday".
    pub fn parse_optional(value: &str) -> Result<Option<Self>, ValidationError> {
        if value.is_empty() {
            return Ok(None);
        }
        Self::parse(value).map(Some)
    }

    // Four digit year, two digit month and day, dash separated.
    fn has_iso_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }

    /// The underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// Returns 0 when the birthday is today. The result never exceeds 365.
    pub fn days_until_from(&self, today: NaiveDate) -> Option<i64> {
        let mut next = self.occurrence_in(today.year())?;
        if next < today {
            next = self.occurrence_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
