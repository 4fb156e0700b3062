//! Contact storage.
//!
//! The [`AddressBook`] owns every [`Record`](crate::models::Record) and is
//! the only place contacts are added, looked up, changed or removed.

mod address_book;
mod pages;

pub use address_book::AddressBook;
pub use pages::{Pages, DEFAULT_PAGE_SIZE};
