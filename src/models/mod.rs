//! Data models for the contact book.
//!
//! This module contains the data structures representing stored contacts.

pub mod record;

pub use record::Record;
