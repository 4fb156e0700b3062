//! Contact service layer.
//!
//! Business logic behind each user-facing operation: validating raw input
//! into domain values and turning address book results into plain data the
//! front end can render.

use crate::book::{AddressBook, Pages};
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::BookResult;
use crate::models::Record;
use chrono::{Local, NaiveDate};

/// One `(name, phone)` pair produced by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMatch {
    pub name: String,
    pub phone: String,
}

/// Everything `show all` displays for one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    pub days_to_birthday: Option<i64>,
}

/// Result of a phone change on an existing contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneChange<'a> {
    /// The contact after the change
    pub record: &'a Record,

    /// Whether the old number was present and got replaced
    pub changed: bool,
}

/// Contact service trait for business operations.
pub trait ContactService {
    /// Add a contact, replacing any contact with the same name.
    ///
    /// An empty or missing `birthday` stores no birthday.
    fn add(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> BookResult<&Record>;

    /// Remove a contact by exact name. Returns whether it existed.
    fn remove(&mut self, name: &str) -> bool;

    /// Find contacts whose name (ignoring case) or phone equals `token`.
    fn find(&self, token: &str) -> Vec<ContactMatch>;

    /// Replace `old` with `new` for the contact named `name`.
    fn change(&mut self, name: &str, old: &str, new: &str) -> BookResult<PhoneChange<'_>>;

    /// Summaries of every contact in insertion order, counted from today.
    fn list_all(&self) -> Vec<ContactSummary>;

    /// Summaries of every contact, with birthdays counted from `today`.
    fn list_all_on(&self, today: NaiveDate) -> Vec<ContactSummary>;

    /// Lazily page through the contacts.
    fn list_paged(&self, page_size: usize) -> Pages<'_>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default implementation of ContactService backed by an in-memory book.
#[derive(Debug, Default)]
pub struct ContactServiceImpl {
    book: AddressBook,
}

impl ContactServiceImpl {
    /// Create a new contact service around `book`.
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    /// Read-only access to the underlying book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    fn summarize(record: &Record, today: NaiveDate) -> ContactSummary {
        ContactSummary {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
            days_to_birthday: record.days_to_next_birthday_from(today),
        }
    }
}

impl ContactService for ContactServiceImpl {
    fn add(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> BookResult<&Record> {
        let name = ContactName::new(name)?;
        let phone = PhoneNumber::new(phone)?;
        let birthday = Birthday::parse_optional(birthday.unwrap_or_default())?;

        Ok(self
            .book
            .add_record(Record::with_phone(name, phone, birthday)))
    }

    fn remove(&mut self, name: &str) -> bool {
        self.book.remove_record(name)
    }

    fn find(&self, token: &str) -> Vec<ContactMatch> {
        let mut seen: Vec<&str> = Vec::new();
        let mut matches = Vec::new();

        let by_name = self.book.find_by_name(token);
        let by_phone = self.book.find_by_phone(token);

        for record in by_name.into_iter().chain(by_phone) {
            let name = record.name().as_str();
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            matches.extend(record.phones().iter().map(|phone| ContactMatch {
                name: name.to_string(),
                phone: phone.to_string(),
            }));
        }

        tracing::debug!(token, results = matches.len(), "Find contacts");
        matches
    }

    fn change(&mut self, name: &str, old: &str, new: &str) -> BookResult<PhoneChange<'_>> {
        let had_old = self.book.get(name).is_some_and(|r| r.has_phone(old));
        let record = self.book.change_phone(name, old, new)?;
        Ok(PhoneChange {
            record,
            changed: had_old,
        })
    }

    fn list_all(&self) -> Vec<ContactSummary> {
        self.list_all_on(Local::now().date_naive())
    }

    fn list_all_on(&self, today: NaiveDate) -> Vec<ContactSummary> {
        self.book
            .records()
            .map(|record| Self::summarize(record, today))
            .collect()
    }

    fn list_paged(&self, page_size: usize) -> Pages<'_> {
        self.book.paginate(page_size)
    }

    fn len(&self) -> usize {
        self.book.len()
    }
}
