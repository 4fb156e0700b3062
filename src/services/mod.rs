//! Application service layer.
//!
//! Services contain business logic and sit between the command dispatcher
//! and the address book. They take raw user input, build validated domain
//! values from it and return plain results for display.

mod contact_service;

pub use contact_service::{
    ContactMatch, ContactService, ContactServiceImpl, ContactSummary, PhoneChange,
};

// Re-export common types used by services
pub use crate::book::{AddressBook, Pages};
pub use crate::models::Record;
