//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use chrono::{Local, NaiveDate};
use std::fmt;

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at creation. Phone numbers keep insertion order and
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with an initial phone and an optional birthday.
    pub fn with_phone(name: ContactName, phone: PhoneNumber, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: vec![phone],
            birthday,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Whether any stored phone equals `phone`.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == phone)
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first occurrence of `phone`. Does nothing if it is absent.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) {
        if let Some(index) = self.phones.iter().position(|p| p == phone) {
            self.phones.remove(index);
        }
    }

    /// Replace every occurrence of `old` with `new`.
    ///
    /// Returns how many entries were replaced; zero leaves the record untouched.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: &PhoneNumber) -> usize {
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| **p == *old) {
            *phone = new.clone();
            replaced += 1;
        }
        replaced
    }

    /// Days until the next birthday, counted from the local current date.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, or `None` without a birthday.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.and_then(|b| b.days_until_from(today))
    }

    /// Phone numbers joined with ", ".
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Formats as `name: phone, phone`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())
    }
}
