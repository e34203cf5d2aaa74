//! Collection wrapper types for displaying query results.

use std::fmt;

/// Newtype wrapper for displaying the names returned by an
/// upcoming-birthday query.
///
/// Renders `"Upcoming birthdays: <a>, <b>"` for a non-empty result and
/// `"No upcoming birthdays."` for an empty one, so callers never have to
/// special-case the empty collection.
///
/// # Examples
///
/// ```rust
/// use rolo_core::display::UpcomingBirthdays;
///
/// let some = UpcomingBirthdays(vec!["Ann".to_string(), "Bob".to_string()]);
/// assert_eq!(some.to_string(), "Upcoming birthdays: Ann, Bob");
///
/// let none = UpcomingBirthdays(Vec::new());
/// assert_eq!(none.to_string(), "No upcoming birthdays.");
/// ```
pub struct UpcomingBirthdays(pub Vec<String>);

impl UpcomingBirthdays {
    /// Check if the result is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of names in the result.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "No upcoming birthdays.")
        } else {
            write!(f, "Upcoming birthdays: {}", self.0.join(", "))
        }
    }
}
