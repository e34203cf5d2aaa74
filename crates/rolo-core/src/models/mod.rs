//! Data models for contact records and the directory that owns them.
//!
//! This module contains the core domain models of the address book: a
//! [`Record`] is one contact (a name, its phone numbers, and an optional
//! birthday), and a [`Directory`] is the full ordered collection of records.
//! Display implementations for these models live in
//! [`crate::display::models`] to keep presentation separate from the data
//! structures themselves.
//!
//! Records are owned exclusively by their directory. Mutation of a stored
//! record goes through the aliasing handle returned by
//! [`Directory::find_mut`], so changes made through a lookup are visible in
//! the directory directly, with no copies involved.

mod directory;
mod record;

#[cfg(test)]
mod tests;

pub use directory::Directory;
pub use record::Record;
