//! Record model definition and related functionality.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    fields::{BirthdayField, NameField, PhoneField},
};

/// Represents one contact: a name, its phone numbers, and an optional
/// birthday.
///
/// The name is fixed at creation. Phones accumulate in insertion order with
/// no deduplication; the birthday is at most one value, where adding again
/// replaces the previous one. Every mutation either applies in full or, when
/// validation fails, leaves the record untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Name of the contact, immutable after creation
    pub name: NameField,

    /// Phone numbers in insertion order (duplicates permitted)
    #[serde(default)]
    pub phones: Vec<PhoneField>,

    /// Optional birthday; re-adding overwrites the previous value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<BirthdayField>,
}

impl Record {
    /// Creates a record with the given name, no phones, and no birthday.
    ///
    /// Never fails: names carry no format constraint in this system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: NameField::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validates `phone` and appends it to the end of the phone list.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::InvalidPhone`] when `phone` is not exactly
    /// ten decimal digits; the phone list is left unchanged.
    ///
    /// [`AddressBookError::InvalidPhone`]: crate::error::AddressBookError::InvalidPhone
    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        let phone = PhoneField::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Parses `birthday` and sets it, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::InvalidBirthday`] when `birthday` is not a
    /// real `DD.MM.YYYY` date; the existing value is left unchanged.
    ///
    /// [`AddressBookError::InvalidBirthday`]: crate::error::AddressBookError::InvalidBirthday
    pub fn add_birthday(&mut self, birthday: &str) -> Result<()> {
        let birthday = BirthdayField::new(birthday)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The raw digit strings of all phones, in insertion order.
    pub fn phone_values(&self) -> Vec<&str> {
        self.phones.iter().map(PhoneField::as_str).collect()
    }
}
