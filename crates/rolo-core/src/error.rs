//! Error types for the address book library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all address book operations.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// Phone number failed the ten-digit validation rule
    #[error("Phone number must be 10 digits.")]
    InvalidPhone,
    /// Birthday text did not parse as a real `DD.MM.YYYY` calendar date
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Persisted directory file exists but could not be decoded
    #[error("Corrupt address book file at '{path}': {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Persisted directory file was written by an incompatible format version
    #[error("Unsupported address book format version {version} in '{path}'")]
    UnsupportedVersion { path: PathBuf, version: u32 },
    /// Serialization errors while writing the directory out
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

impl AddressBookError {
    /// Creates a file system error with path context.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Creates a corrupt-file error with path context.
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for address book operations
pub type Result<T> = std::result::Result<T, AddressBookError>;
