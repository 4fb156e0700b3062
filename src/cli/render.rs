//! User-facing text produced by the dispatcher.

use crate::domain::ValidationError;
use crate::error::{BookError, CommandError};
use crate::services::{ContactMatch, ContactSummary};

pub const HELP_TEXT: &str = "\
What can this bot do?
  1. Save a contact (name, phone number and optional birthday).
     The number must be exactly 12 digits, the birthday YYYY-MM-DD.
     Use command: add <name> <number> [<birthday>]
  2. Change the phone number of a saved contact.
     Use command: change <name> <old number> <new number>
  3. Show all saved contacts with their phones and birthdays.
     Use command: show all
  4. Page through the address book a few contacts at a time.
     Use command: show in parts (press Enter to see the next page)
  5. Remove a contact.
     Use command: remove <name>
  6. Find a contact by name or by phone.
     Use command: find <name or phone>
  7. Say hello, show this help, or leave.
     Use command: hello | help | exit | close | good bye";

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const NO_CONTACTS: &str = "There are no contacts.";
pub const NOTHING_FOUND: &str = "No contacts were found.";
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";

const FORMAT_RULES: &str = "\
Please enter the correct format of name and phone number.
Correct format:
  1. The length of the number must be exactly 12 digits.
  2. Birthday format: YYYY-MM-DD.
  3. Use a gap between name, number and birthday.";

pub fn added(name: &str) -> String {
    format!("Contact {} has been saved.", name)
}

pub fn removed(name: &str, existed: bool) -> String {
    if existed {
        format!("Contact {} has been removed.", name)
    } else {
        format!("There is no contact with name \"{}\".", name)
    }
}

pub fn changed(name: &str, old: &str, new: &str, changed: bool) -> String {
    if changed {
        format!(
            "Phone number for contact {} has been changed from {} to {}.",
            name, old, new
        )
    } else {
        format!("Contact {} has no phone {}, nothing changed.", name, old)
    }
}

pub fn found(matches: &[ContactMatch]) -> Vec<String> {
    if matches.is_empty() {
        return vec![NOTHING_FOUND.to_string()];
    }
    std::iter::once("Contacts found:".to_string())
        .chain(matches.iter().map(|m| format!("{} - {}", m.name, m.phone)))
        .collect()
}

pub fn summary(contact: &ContactSummary) -> String {
    let phones = contact.phones.join(", ");
    match (&contact.birthday, contact.days_to_birthday) {
        (Some(birthday), Some(days)) => format!(
            "{}: {}  {}  {} days until birthday",
            contact.name, phones, birthday, days
        ),
        (Some(birthday), None) => format!("{}: {}  {}", contact.name, phones, birthday),
        (None, _) => format!("{}: {}", contact.name, phones),
    }
}

pub fn book_error(err: &BookError) -> String {
    match err {
        BookError::NotFound(_) => "There isn't a contact with this name.".to_string(),
        BookError::Validation(err) => validation_error(err),
    }
}

pub fn validation_error(err: &ValidationError) -> String {
    format!("{}\n{}", err, FORMAT_RULES)
}

pub fn command_error(err: &CommandError) -> String {
    match err {
        CommandError::Unknown(_) => {
            "Sorry, I don't understand you. Use the available command (type 'help').".to_string()
        }
        CommandError::Malformed { usage, .. } => {
            format!("Usage: {}\n{}", usage, FORMAT_RULES)
        }
    }
}
