//! Directory model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Record;

/// The full contact list: an ordered, exclusively owned collection of
/// [`Record`]s.
///
/// Insertion order is preserved and no uniqueness constraint is enforced on
/// names; adding a second record with an existing name produces two distinct
/// entries. Callers that want update-or-create semantics look up with
/// [`Directory::find_mut`] first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Directory {
    /// Records in insertion order
    pub records: Vec<Record>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to the end of the record list. Always succeeds.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Returns the first record whose name exactly equals `name`.
    ///
    /// The match is case-sensitive with no trimming; a linear scan in
    /// insertion order decides which record is "first".
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name.as_str() == name)
    }

    /// Mutable variant of [`Directory::find`].
    ///
    /// The returned handle aliases the stored record, so mutations through it
    /// are visible in the directory directly.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name.as_str() == name)
    }

    /// Names of contacts whose birthday falls within the next week.
    ///
    /// Each stored birthday is projected onto `today`'s year; the record's
    /// name is included when the whole-day difference `projected - today`
    /// lies in `[0, 7]`. A projection already past `today` is excluded
    /// rather than rolled over to next year, and a projection that does not
    /// exist in `today`'s year (Feb 29 outside a leap year) is skipped.
    ///
    /// Output preserves directory order, repeats repeated names, and is
    /// empty (not an error) when nothing qualifies.
    pub fn upcoming_birthdays(&self, today: Date) -> Vec<String> {
        let mut upcoming = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday else {
                continue;
            };
            let date = birthday.date();
            let Ok(projected) = Date::new(today.year(), date.month(), date.day()) else {
                continue;
            };
            let days = (projected - today).get_days();
            if (0..=7).contains(&days) {
                upcoming.push(record.name.as_str().to_string());
            }
        }
        upcoming
    }

    /// Number of records in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
