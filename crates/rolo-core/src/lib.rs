//! Core library for the Rolo contact directory application.
//!
//! This crate provides the business logic for a personal address book:
//! validated contact fields, the record/directory model, the upcoming
//! birthday query, and durable save/load of the whole directory to a single
//! file.
//!
//! # Architecture
//!
//! - **Fields** ([`fields`]): validated value types for names, phone
//!   numbers, and birthdays. A field can only exist if its invariant holds.
//! - **Models** ([`models`]): [`Record`] (one contact) and [`Directory`]
//!   (the full ordered collection), built on the field types.
//! - **Display** ([`display`]): the textual rendering contracts the command
//!   shell prints verbatim.
//! - **Store** ([`store`]): whole-directory persistence as one versioned
//!   JSON file.
//!
//! # Quick Start
//!
//! ```rust
//! use rolo_core::{Directory, Record, StoreBuilder};
//!
//! # fn example() -> Result<(), rolo_core::AddressBookError> {
//! let store = StoreBuilder::new()
//!     .with_data_path(Some("contacts.json"))
//!     .build()?;
//!
//! let mut directory = store.load()?;
//!
//! let mut record = Record::new("Ann");
//! record.add_phone("0123456789")?;
//! record.add_birthday("05.06.1990")?;
//! directory.add_record(record);
//!
//! println!("{}", directory);
//! store.save(&directory)?;
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod fields;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use display::UpcomingBirthdays;
pub use error::{AddressBookError, Result};
pub use fields::{BirthdayField, NameField, PhoneField};
pub use models::{Directory, Record};
pub use store::{DirectoryStore, StoreBuilder};
