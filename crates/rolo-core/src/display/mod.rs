//! Display formatting for records, directories, and query results.
//!
//! Presentation is kept out of the data models: the [`Display`] impls for
//! [`Record`] and [`Directory`] live in [`models`], and newtype wrappers for
//! query output live in [`collections`]. The rendered text is the contract
//! the command shell prints verbatim, so the formats here are fixed:
//!
//! - a record renders as `"<name>: <phones>, Birthday: <date|No birthday>"`,
//! - a directory renders its records joined by newlines,
//! - an upcoming-birthday report renders as a single summary line.
//!
//! [`Display`]: std::fmt::Display
//! [`Record`]: crate::models::Record
//! [`Directory`]: crate::models::Directory

pub mod collections;
pub mod models;

pub use collections::UpcomingBirthdays;
