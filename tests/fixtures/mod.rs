//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and pre-filled address books.

use contact_book::{AddressBook, Birthday, ContactName, PhoneNumber, Record};

/// Create a record with one phone and no birthday.
pub fn sample_record(name: &str, phone: &str) -> Record {
    Record::with_phone(
        ContactName::new(name).unwrap(),
        PhoneNumber::new(phone).unwrap(),
        None,
    )
}

/// Create a record with one phone and a birthday.
#[allow(dead_code)]
pub fn sample_record_with_birthday(name: &str, phone: &str, birthday: &str) -> Record {
    Record::with_phone(
        ContactName::new(name).unwrap(),
        PhoneNumber::new(phone).unwrap(),
        Some(Birthday::parse(birthday).unwrap()),
    )
}

/// An address book holding one contact per name, numbered phones in order.
#[allow(dead_code)]
pub fn sample_book(names: &[&str]) -> AddressBook {
    let mut book = AddressBook::new();
    for (i, name) in names.iter().enumerate() {
        book.add_record(sample_record(name, &format!("3805000000{:02}", i)));
    }
    book
}
