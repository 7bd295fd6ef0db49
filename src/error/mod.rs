//! Error handling for the directory loader.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod util;

/// Specialized error type for directory operations
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Error opening or reading a file
    #[error("IO error for {}: {message}", .path.display())]
    Io {
        /// Path of the file the operation touched
        path: PathBuf,
        /// What went wrong, with purpose context
        message: String,
        /// Underlying OS error, when one exists
        #[source]
        source: Option<io::Error>,
    },
    /// Error decoding the JSON document
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// A populated child slot was missing its grade or age
    #[error("record {record}: child slot {slot} has a name but no \"{label}\"")]
    ChildSlot {
        /// Zero-based index of the record in the source array
        record: usize,
        /// One-based slot number, matching the source labels
        slot: usize,
        /// The missing label suffix (`Grade` or `Age`)
        label: &'static str,
    },
}

impl DirectoryError {
    /// Create an IO error with path context
    #[must_use]
    pub fn io_error(path: &Path, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an IO error with path context and the underlying OS error
    #[must_use]
    pub fn io_error_with_source(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: message.into(),
            source: Some(source),
        }
    }
}

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
