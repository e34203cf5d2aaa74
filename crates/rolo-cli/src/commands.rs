//! Command handlers for the interactive shell.
//!
//! Each handler takes the parsed argument list and the shared [`Directory`],
//! applies one operation, and returns the message to show the user. This is
//! the boundary where core validation errors become user-visible text: the
//! error's display string is returned instead of propagating, so a bad input
//! never aborts the shell and never corrupts existing state.

use jiff::Zoned;
use log::warn;
use rolo_core::{Directory, Record, UpcomingBirthdays};

/// `add <name> <phone>`: update-or-create.
///
/// If a record with the name exists, the phone is appended to it; otherwise
/// a new record is created and added to the book. On a validation failure
/// nothing changes, in particular no phoneless record is left behind.
pub fn add_contact(args: &[&str], book: &mut Directory) -> String {
    let [name, phone] = args else {
        return "Usage: add <name> <phone>".to_string();
    };

    if let Some(record) = book.find_mut(name) {
        return match record.add_phone(phone) {
            Ok(()) => "Contact updated.".to_string(),
            Err(e) => {
                warn!("Rejected phone for existing contact '{name}'");
                e.to_string()
            }
        };
    }

    let mut record = Record::new(*name);
    match record.add_phone(phone) {
        Ok(()) => {
            book.add_record(record);
            "Contact added.".to_string()
        }
        Err(e) => e.to_string(),
    }
}

/// `add-birthday <name> <DD.MM.YYYY>`: sets or replaces a birthday.
pub fn add_birthday(args: &[&str], book: &mut Directory) -> String {
    let [name, birthday] = args else {
        return "Usage: add-birthday <name> <DD.MM.YYYY>".to_string();
    };

    let Some(record) = book.find_mut(name) else {
        return "Contact not found.".to_string();
    };
    match record.add_birthday(birthday) {
        Ok(()) => format!("Birthday added for {name}."),
        Err(e) => e.to_string(),
    }
}

/// `show-birthday <name>`: prints the stored birthday.
pub fn show_birthday(args: &[&str], book: &Directory) -> String {
    let [name] = args else {
        return "Usage: show-birthday <name>".to_string();
    };

    match book.find(name).and_then(|record| record.birthday) {
        Some(birthday) => format!("{name}'s birthday is {birthday}."),
        None => "Birthday not found.".to_string(),
    }
}

/// `phone <name>`: prints the contact's phone numbers.
pub fn show_phones(args: &[&str], book: &Directory) -> String {
    let [name] = args else {
        return "Usage: phone <name>".to_string();
    };

    match book.find(name) {
        Some(record) => record.phone_values().join(", "),
        None => "Contact not found.".to_string(),
    }
}

/// `birthdays`: reports contacts with a birthday in the next 7 days.
pub fn birthdays(book: &Directory) -> String {
    let today = Zoned::now().date();
    UpcomingBirthdays(book.upcoming_birthdays(today)).to_string()
}
