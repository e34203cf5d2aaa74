//! Display implementations for domain models.

use std::fmt;

use crate::models::{Directory, Record};

impl fmt::Display for Record {
    /// Formats as `"<name>: <phone1>, <phone2>, Birthday: <value>"`.
    ///
    /// Phones are joined by `", "`; a record without phones renders an empty
    /// segment between the colon and the comma. The birthday segment shows
    /// the `DD.MM.YYYY` text or `No birthday`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self.phone_values().join(", ");
        write!(f, "{}: {}, Birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => write!(f, "No birthday"),
        }
    }
}

impl fmt::Display for Directory {
    /// Formats each record on its own line, in directory order.
    ///
    /// An empty directory renders as empty text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
