//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DirectoryError, Result};

/// Safely read a file with rich error information
///
/// This function attempts to read a file in full and provides detailed
/// error information if the operation fails.
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
///
/// # Returns
/// * `Result<Vec<u8>>` - The file contents or a detailed error
pub fn safe_read_file(path: &Path, purpose: &str) -> Result<Vec<u8>> {
    // Check if the path exists
    if !path.exists() {
        return Err(DirectoryError::io_error(
            path,
            format!("file not found (needed for: {purpose})"),
        ));
    }

    // Check if the path is a file
    if !path.is_file() {
        return Err(DirectoryError::io_error(
            path,
            format!("path is not a file (expected a file for: {purpose})"),
        ));
    }

    // Try to read the file
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            // Provide different error messages based on the error kind
            let message = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "permission denied - check file permissions".to_string()
                }
                io::ErrorKind::NotFound => {
                    "file not found - it may have been deleted during operation".to_string()
                }
                _ => format!("failed to read file for: {purpose}"),
            };

            Err(DirectoryError::io_error_with_source(path, message, e))
        }
    }
}
