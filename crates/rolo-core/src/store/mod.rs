//! File persistence for the contact directory.
//!
//! The whole directory is persisted as a single JSON document, written with
//! a whole-file overwrite on save and read back in full on load. The
//! document carries a format version so an incompatible future layout is
//! rejected instead of being misread. Absence of the file is the normal
//! first-run case and yields an empty directory; a file that exists but
//! cannot be decoded fails loudly rather than silently discarding data.

use std::{fs, io, path::PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AddressBookError, Result},
    models::{Directory, Record},
};

pub mod builder;

pub use builder::StoreBuilder;

/// Version of the on-disk document layout.
const FORMAT_VERSION: u32 = 1;

/// On-disk envelope around the record list.
#[derive(Deserialize)]
struct StoredDirectory {
    version: u32,
    records: Vec<Record>,
}

/// Borrowing counterpart of [`StoredDirectory`] used when writing.
#[derive(Serialize)]
struct StoredDirectoryRef<'a> {
    version: u32,
    records: &'a [Record],
}

/// Handle to the persisted directory file.
///
/// Construct through [`StoreBuilder`], which resolves the default XDG data
/// path and creates parent directories as needed.
pub struct DirectoryStore {
    pub(crate) path: PathBuf,
}

impl DirectoryStore {
    /// Creates a store for the given file path.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the persisted directory file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Writes the entire directory to the store's file, replacing any
    /// previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::Serialization`] when encoding fails and
    /// [`AddressBookError::FileSystem`] when the write itself fails.
    pub fn save(&self, directory: &Directory) -> Result<()> {
        let stored = StoredDirectoryRef {
            version: FORMAT_VERSION,
            records: &directory.records,
        };
        let json = serde_json::to_vec_pretty(&stored)?;
        fs::write(&self.path, json)
            .map_err(|e| AddressBookError::file_system(&self.path, e))?;
        debug!(
            "Saved {} record(s) to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Reads the directory back from the store's file.
    ///
    /// A missing file is the expected first-run case and yields an empty
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::FileSystem`] when the file exists but
    /// cannot be read, [`AddressBookError::Corrupt`] when it cannot be
    /// decoded, and [`AddressBookError::UnsupportedVersion`] when it was
    /// written by an incompatible format version.
    pub fn load(&self) -> Result<Directory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "No directory file at {}, starting empty",
                    self.path.display()
                );
                return Ok(Directory::new());
            }
            Err(e) => return Err(AddressBookError::file_system(&self.path, e)),
        };

        let stored: StoredDirectory = serde_json::from_slice(&bytes)
            .map_err(|e| AddressBookError::corrupt(&self.path, e))?;
        if stored.version != FORMAT_VERSION {
            return Err(AddressBookError::UnsupportedVersion {
                path: self.path.clone(),
                version: stored.version,
            });
        }

        debug!(
            "Loaded {} record(s) from {}",
            stored.records.len(),
            self.path.display()
        );
        Ok(Directory {
            records: stored.records,
        })
    }
}
