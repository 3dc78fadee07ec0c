//! User-facing text and the macros that print it.
//!
//! Messages are values of [`Message`]; their wording is defined once in
//! [`display`]. The `msg_*!` macros in [`macros`] decide where the text goes.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
