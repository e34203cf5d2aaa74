use jiff::civil::date;

use crate::models::{Directory, Record};

fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name);
    record.add_birthday(birthday).expect("valid birthday");
    record
}

#[test]
fn test_record_new_is_empty() {
    let record = Record::new("Ann");
    assert_eq!(record.name.as_str(), "Ann");
    assert!(record.phones.is_empty());
    assert!(record.birthday.is_none());
}

#[test]
fn test_add_phone_appends_in_order() {
    let mut record = Record::new("Ann");
    record.add_phone("0123456789").expect("valid phone");
    record.add_phone("9876543210").expect("valid phone");
    record.add_phone("0123456789").expect("duplicates are allowed");

    assert_eq!(
        record.phone_values(),
        vec!["0123456789", "9876543210", "0123456789"]
    );
}

#[test]
fn test_add_phone_failure_leaves_record_unchanged() {
    let mut record = Record::new("Ann");
    record.add_phone("0123456789").expect("valid phone");

    let before = record.phones.len();
    assert!(record.add_phone("12345").is_err());
    assert_eq!(record.phones.len(), before);
}

#[test]
fn test_add_birthday_replaces_previous_value() {
    let mut record = Record::new("Ann");
    record.add_birthday("01.01.1990").expect("valid birthday");
    record.add_birthday("02.02.1991").expect("valid birthday");

    let birthday = record.birthday.expect("birthday set");
    assert_eq!(birthday.to_string(), "02.02.1991");
}

#[test]
fn test_add_birthday_failure_keeps_existing_value() {
    let mut record = Record::new("Ann");
    record.add_birthday("01.01.1990").expect("valid birthday");

    assert!(record.add_birthday("31.02.2000").is_err());
    assert_eq!(record.birthday.expect("birthday kept").to_string(), "01.01.1990");
}

#[test]
fn test_directory_add_and_find() {
    let mut directory = Directory::new();
    directory.add_record(Record::new("Ann"));

    assert!(directory.find("Ann").is_some());
    assert!(directory.find("Bob").is_none());
}

#[test]
fn test_find_is_exact_and_case_sensitive() {
    let mut directory = Directory::new();
    directory.add_record(Record::new("Ann"));

    assert!(directory.find("ann").is_none());
    assert!(directory.find("Ann ").is_none());
}

#[test]
fn test_find_returns_first_match() {
    let mut directory = Directory::new();
    let mut first = Record::new("Ann");
    first.add_phone("1111111111").expect("valid phone");
    directory.add_record(first);
    directory.add_record(Record::new("Ann"));

    let found = directory.find("Ann").expect("record exists");
    assert_eq!(found.phone_values(), vec!["1111111111"]);
    assert_eq!(directory.len(), 2);
}

#[test]
fn test_find_mut_aliases_stored_record() {
    let mut directory = Directory::new();
    directory.add_record(Record::new("Ann"));

    directory
        .find_mut("Ann")
        .expect("record exists")
        .add_phone("0123456789")
        .expect("valid phone");

    let found = directory.find("Ann").expect("record exists");
    assert_eq!(found.phone_values(), vec!["0123456789"]);
}

#[test]
fn test_upcoming_birthdays_within_window() {
    let mut directory = Directory::new();
    directory.add_record(record_with_birthday("Ann", "05.06.1990"));

    // Five days before the projected date
    let upcoming = directory.upcoming_birthdays(date(2024, 6, 1));
    assert_eq!(upcoming, vec!["Ann".to_string()]);
}

#[test]
fn test_upcoming_birthdays_excludes_passed_dates() {
    let mut directory = Directory::new();
    directory.add_record(record_with_birthday("Ann", "05.06.1990"));

    // Projected date has passed; the window does not roll over to next year
    let upcoming = directory.upcoming_birthdays(date(2024, 6, 10));
    assert!(upcoming.is_empty());
}

#[test]
fn test_upcoming_birthdays_window_boundaries() {
    let mut directory = Directory::new();
    directory.add_record(record_with_birthday("Ann", "08.06.1990"));

    // Day 0 and day 7 are inside the closed interval, day 8 is not
    assert_eq!(directory.upcoming_birthdays(date(2024, 6, 8)).len(), 1);
    assert_eq!(directory.upcoming_birthdays(date(2024, 6, 1)).len(), 1);
    assert!(directory.upcoming_birthdays(date(2024, 5, 31)).is_empty());
}

#[test]
fn test_upcoming_birthdays_preserves_order_and_duplicates() {
    let mut directory = Directory::new();
    directory.add_record(record_with_birthday("Bob", "03.06.1980"));
    directory.add_record(Record::new("NoBirthday"));
    directory.add_record(record_with_birthday("Ann", "05.06.1990"));
    directory.add_record(record_with_birthday("Ann", "06.06.1991"));

    let upcoming = directory.upcoming_birthdays(date(2024, 6, 1));
    assert_eq!(
        upcoming,
        vec!["Bob".to_string(), "Ann".to_string(), "Ann".to_string()]
    );
}

#[test]
fn test_upcoming_birthdays_skips_feb_29_on_non_leap_years() {
    let mut directory = Directory::new();
    directory.add_record(record_with_birthday("Leap", "29.02.2000"));

    assert!(directory.upcoming_birthdays(date(2023, 2, 25)).is_empty());
    assert_eq!(directory.upcoming_birthdays(date(2024, 2, 25)).len(), 1);
}
