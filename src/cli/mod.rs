//! Interactive command-line front end.
//!
//! Turns lines typed at the prompt into [`Command`] values, runs them through
//! a [`ContactService`](crate::services::ContactService) and renders the
//! results. Nothing below `services` ever writes to the terminal.

pub mod command;
pub mod dispatcher;
pub mod render;

pub use command::Command;
pub use dispatcher::{Dispatcher, Flow};
