//! Builder for creating and configuring DirectoryStore instances.

use std::path::{Path, PathBuf};

use super::DirectoryStore;
use crate::error::{AddressBookError, Result};

/// Builder for creating and configuring [`DirectoryStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    data_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom directory file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/rolo/directory.json` or
    /// `~/.local/share/rolo/directory.json`.
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::FileSystem`] when the parent directory of
    /// the data file cannot be created, and
    /// [`AddressBookError::XdgDirectory`] when the default path cannot be
    /// resolved.
    pub fn build(self) -> Result<DirectoryStore> {
        let path = if let Some(path) = self.data_path {
            path
        } else {
            Self::default_data_path()?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AddressBookError::file_system(parent, e))?;
        }

        Ok(DirectoryStore::new(path))
    }

    /// Returns the default data file path following the XDG Base Directory
    /// specification.
    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("rolo")
            .place_data_file("directory.json")
            .map_err(|e| AddressBookError::XdgDirectory(e.to_string()))
    }
}
