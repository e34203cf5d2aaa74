//! Validated field types for contact records.
//!
//! Each attribute of a contact is wrapped in its own validated value type:
//! [`NameField`] (free-form text), [`PhoneField`] (exactly ten decimal
//! digits), and [`BirthdayField`] (a real calendar date written as
//! `DD.MM.YYYY`). A field can only be constructed through its validating
//! constructor, so holding one is proof the invariant holds. Deserialization
//! goes through the same constructors, so a hand-edited data file cannot
//! smuggle an invalid value past the checks.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{AddressBookError, Result};

/// Returns true iff `value` is exactly ten ASCII decimal digits.
///
/// # Examples
///
/// ```rust
/// use rolo_core::fields::validate_phone;
///
/// assert!(validate_phone("0123456789"));
/// assert!(!validate_phone("12345"));
/// assert!(!validate_phone("12345abcde"));
/// ```
pub fn validate_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses `value` as a `DD.MM.YYYY` calendar date.
///
/// The pattern is strict: two-digit day, two-digit month, four-digit year,
/// literal dots. The decomposed day/month/year must name a real date, so
/// `"31.02.2000"` is rejected along with shape mismatches.
///
/// # Errors
///
/// Returns [`AddressBookError::InvalidBirthday`] on any mismatch.
pub fn parse_birthday(value: &str) -> Result<Date> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 2 | 5) || b.is_ascii_digit());
    if !shape_ok {
        return Err(AddressBookError::InvalidBirthday);
    }

    let day: i8 = value[0..2].parse().map_err(|_| AddressBookError::InvalidBirthday)?;
    let month: i8 = value[3..5].parse().map_err(|_| AddressBookError::InvalidBirthday)?;
    let year: i16 = value[6..10].parse().map_err(|_| AddressBookError::InvalidBirthday)?;

    Date::new(year, month, day).map_err(|_| AddressBookError::InvalidBirthday)
}

/// Renders a date back to `DD.MM.YYYY` text.
///
/// Exact inverse of [`parse_birthday`] for every date that function produces.
pub fn format_birthday(date: Date) -> String {
    date.strftime("%d.%m.%Y").to_string()
}

/// A contact's name: arbitrary text, immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NameField(String);

impl NameField {
    /// Wraps a name. Names carry no format constraint.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated ten-digit phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneField(String);

impl PhoneField {
    /// Validates and wraps a phone number.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::InvalidPhone`] unless `value` is exactly
    /// ten decimal digits.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if validate_phone(&value) {
            Ok(Self(value))
        } else {
            Err(AddressBookError::InvalidPhone)
        }
    }

    /// The raw digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneField {
    type Error = AddressBookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PhoneField> for String {
    fn from(value: PhoneField) -> Self {
        value.0
    }
}

impl fmt::Display for PhoneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact's birthday, stored as the parsed calendar date.
///
/// Displays back as `DD.MM.YYYY`, so parsing then printing returns the
/// original text for every valid input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BirthdayField(Date);

impl BirthdayField {
    /// Parses and wraps a `DD.MM.YYYY` birthday.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::InvalidBirthday`] when `value` is not a
    /// real calendar date in that format.
    pub fn new(value: &str) -> Result<Self> {
        parse_birthday(value).map(Self)
    }

    /// The stored calendar date.
    pub fn date(&self) -> Date {
        self.0
    }
}

impl fmt::Display for BirthdayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_birthday(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone_accepts_ten_digits() {
        assert!(validate_phone("0123456789"));
        assert!(validate_phone("0000000000"));
    }

    #[test]
    fn test_validate_phone_rejects_bad_input() {
        assert!(!validate_phone(""));
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("12345678901"));
        assert!(!validate_phone("12345abcde"));
        assert!(!validate_phone("123456789 "));
    }

    #[test]
    fn test_phone_field_new() {
        let phone = PhoneField::new("0123456789").expect("valid phone");
        assert_eq!(phone.as_str(), "0123456789");

        let err = PhoneField::new("12345").unwrap_err();
        assert_eq!(err.to_string(), "Phone number must be 10 digits.");
    }

    #[test]
    fn test_parse_birthday_round_trip() {
        for text in ["01.01.2000", "29.02.2000", "31.12.1985", "05.06.1990"] {
            let date = parse_birthday(text).expect("valid date");
            assert_eq!(format_birthday(date), text);
        }
    }

    #[test]
    fn test_parse_birthday_rejects_impossible_dates() {
        assert!(parse_birthday("31.02.2000").is_err());
        assert!(parse_birthday("29.02.1999").is_err());
        assert!(parse_birthday("01.13.2000").is_err());
        assert!(parse_birthday("00.01.2000").is_err());
    }

    #[test]
    fn test_parse_birthday_rejects_shape_mismatch() {
        assert!(parse_birthday("1.01.2000").is_err());
        assert!(parse_birthday("01-01-2000").is_err());
        assert!(parse_birthday("01.01.00").is_err());
        assert!(parse_birthday("2000.01.01").is_err());
        assert!(parse_birthday("").is_err());
        assert!(parse_birthday("01.01.2000 ").is_err());
    }

    #[test]
    fn test_birthday_field_display() {
        let birthday = BirthdayField::new("07.03.1992").expect("valid date");
        assert_eq!(birthday.to_string(), "07.03.1992");
    }

    #[test]
    fn test_name_field_holds_arbitrary_text() {
        let name = NameField::new("Ann O'Brien");
        assert_eq!(name.as_str(), "Ann O'Brien");
        assert_eq!(name.to_string(), "Ann O'Brien");
    }
}
