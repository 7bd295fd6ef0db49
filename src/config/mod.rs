//! Configuration for contact-field visibility
//!
//! The surrounding application persists three boolean flags that control which
//! contact blocks the detail screen shows. The loader and query engine never
//! read them; they ride along here so every consumer shares the same defaults
//! and on-disk shape.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};
use crate::utils::logging::log_operation_start;

/// Visibility flags for the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySettings {
    /// Whether to show the father's contact block
    pub show_father_contact: bool,
    /// Whether to show the mother's contact block
    pub show_mother_contact: bool,
    /// Whether to show the children section
    pub show_children_info: bool,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            show_father_contact: true,
            show_mother_contact: true,
            show_children_info: false,
        }
    }
}

impl DirectorySettings {
    /// Load settings, falling back to defaults when the file is missing or
    /// malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!(
                        "malformed settings at {}: {e}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("no settings at {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Persist settings as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if the flags fail to serialize or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<()> {
        log_operation_start("saving settings to", path);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .map_err(|e| DirectoryError::io_error_with_source(path, "failed to write settings", e))
    }
}
