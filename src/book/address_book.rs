//! The in-memory address book.

use super::pages::Pages;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use indexmap::IndexMap;

/// Keyed collection of contact records.
///
/// Records are keyed by their exact name and kept in insertion order.
/// Adding a record under an existing name replaces the old one in place.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Insert a record, replacing any record stored under the same name.
    ///
    /// Returns the stored record.
    pub fn add_record(&mut self, record: Record) -> &Record {
        let key = record.name().as_str().to_string();
        let (index, previous) = self.records.insert_full(key, record);
        if previous.is_some() {
            tracing::debug!(index, "Replaced existing contact");
        } else {
            tracing::debug!(total = self.records.len(), "Added contact");
        }
        &self.records[index]
    }

    /// Remove the record stored under `name`, returning whether it existed.
    pub fn remove_record(&mut self, name: &str) -> bool {
        let existed = self.records.shift_remove(name).is_some();
        tracing::debug!(contact = %name, existed, "Removed contact");
        existed
    }

    /// Records whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| record.name().matches_ignore_case(name))
            .collect()
    }

    /// Records holding a phone number equal to `phone`.
    pub fn find_by_phone(&self, phone: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| record.has_phone(phone))
            .collect()
    }

    /// Replace `old` with `new` in the phones of the contact named `name`.
    ///
    /// A contact without `old` is left unchanged and this still succeeds.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if no contact is stored under `name`.
    /// - `BookError::Validation` if either number is not 12 digits.
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<&Record> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;

        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;
        let replaced = record.edit_phone(&old, &new);
        tracing::debug!(contact = %name, replaced, "Changed phone");

        Ok(&*record)
    }

    /// Lazily split the book into pages of at most `page_size` lines.
    pub fn paginate(&self, page_size: usize) -> Pages<'_> {
        Pages::new(self.records.values(), page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, ContactName, ValidationError};

    fn record(name: &str, phone: &str) -> Record {
        Record::with_phone(
            ContactName::new(name).unwrap(),
            PhoneNumber::new(phone).unwrap(),
            None,
        )
    }

    #[test]
    fn test_add_and_find_by_name_any_case() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "380501234567"));

        for query in ["Anna", "anna", "ANNA"] {
            let found = book.find_by_name(query);
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].name().as_str(), "Anna");
        }
        assert!(book.find_by_name("Ann").is_empty());
    }

    #[test]
    fn test_find_by_name_returns_keys_differing_by_case() {
        let mut book = AddressBook::new();
        book.add_record(record("anna", "380501234567"));
        book.add_record(record("Anna", "380501234568"));

        assert_eq!(book.len(), 2);
        assert_eq!(book.find_by_name("ANNA").len(), 2);
    }

    #[test]
    fn test_add_same_name_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "380501234567"));
        book.add_record(record("Bob", "380991112233"));
        book.add_record(record("Anna", "380000000000"));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Anna", "Bob"]);
        assert!(book.get("Anna").unwrap().has_phone("380000000000"));
    }

    #[test]
    fn test_remove_record() {
        let mut book = AddressBook::new();
        assert!(!book.remove_record("Anna"));

        book.add_record(record("Anna", "380501234567"));
        assert!(book.remove_record("Anna"));
        assert!(book.find_by_name("Anna").is_empty());
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_record_is_case_sensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "380501234567"));
        assert!(!book.remove_record("anna"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_remaining() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C"] {
            book.add_record(record(name, "380501234567"));
        }
        book.remove_record("A");
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_find_by_phone() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", "380991112233"));
        book.add_record(record("Carl", "380991112233"));
        book.add_record(record("Dina", "380670000000"));

        let found = book.find_by_phone("380991112233");
        let names: Vec<&str> = found.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carl"]);
        assert!(book.find_by_phone("000000000000").is_empty());
    }

    #[test]
    fn test_find_by_phone_returns_record_once() {
        let mut book = AddressBook::new();
        let mut bob = record("Bob", "380991112233");
        bob.add_phone(PhoneNumber::new("380991112233").unwrap());
        book.add_record(bob);

        assert_eq!(book.find_by_phone("380991112233").len(), 1);
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", "380991112233"));

        let updated = book
            .change_phone("Bob", "380991112233", "380501234567")
            .unwrap();
        assert!(updated.has_phone("380501234567"));
        assert!(!updated.has_phone("380991112233"));
    }

    #[test]
    fn test_change_phone_missing_contact() {
        let mut book = AddressBook::new();
        let result = book.change_phone("Ghost", "380991112233", "380501234567");
        assert_eq!(result.unwrap_err(), BookError::NotFound("Ghost".to_string()));
    }

    #[test]
    fn test_change_phone_invalid_numbers() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", "380991112233"));

        let result = book.change_phone("Bob", "123", "380501234567");
        assert_eq!(
            result.unwrap_err(),
            BookError::Validation(ValidationError::InvalidPhone("123".to_string()))
        );

        let result = book.change_phone("Bob", "380991112233", "abc");
        assert!(matches!(
            result,
            Err(BookError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert!(book.get("Bob").unwrap().has_phone("380991112233"));
    }

    #[test]
    fn test_change_phone_without_old_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", "380991112233"));

        let before = book.get("Bob").cloned();
        book.change_phone("Bob", "111111111111", "222222222222")
            .unwrap();
        assert_eq!(book.get("Bob").cloned(), before);
    }

    #[test]
    fn test_paginate_five_entries() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C", "D", "E"] {
            book.add_record(record(name, "380501234567"));
        }

        let pages: Vec<Vec<String>> = book.paginate(2).collect();
        let expected = vec![
            vec!["A: 380501234567", "B: 380501234567"],
            vec!["C: 380501234567", "D: 380501234567"],
            vec!["E: 380501234567"],
        ];
        assert_eq!(pages, expected);
    }

    #[test]
    fn test_records_keep_birthday() {
        let mut book = AddressBook::new();
        let mut anna = record("Anna", "380501234567");
        anna.set_birthday(Some(Birthday::parse("1990-05-20").unwrap()));
        book.add_record(anna);

        let stored = book.get("Anna").unwrap();
        assert_eq!(stored.birthday().unwrap().to_string(), "1990-05-20");
    }
}
