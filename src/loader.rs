//! Directory loading entry points
//!
//! The directory is a bundled, read-only JSON array of flat records. The
//! application shell calls [`load_directory`] (or the delayed variant behind
//! its loading indicator) and renders whatever comes back; every failure mode
//! surfaces as an empty collection plus a logged diagnostic, indistinguishable
//! from a legitimately empty directory. The `try_` entry points propagate the
//! underlying errors for callers that want them.

use std::path::Path;
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::error::Result;
use crate::error::util::safe_read_file;
use crate::models::Family;
use crate::models::adapters::family_from_record;
use crate::schema::FamilyRecord;
use crate::utils::logging::log_operation_start;

/// Artificial delay used by the splash-screen load path
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_secs(2);

/// Load the directory, degrading to an empty collection on any failure.
///
/// Resource-not-found and structural decode failures are logged through the
/// `log` facade and swallowed, never propagated.
#[must_use]
pub fn load_directory(path: &Path) -> Vec<Family> {
    match try_load_directory(path) {
        Ok(families) => {
            log::info!("loaded {} families from {}", families.len(), path.display());
            families
        }
        Err(e) => {
            log::error!("error loading directory from {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Block for `delay`, then perform the graceful load.
///
/// The delay exists so the shell's loading indicator has time to appear; the
/// load itself is synchronous on the calling thread and always completes.
#[must_use]
pub fn load_directory_with_delay(path: &Path, delay: Duration) -> Vec<Family> {
    thread::sleep(delay);
    load_directory(path)
}

/// Load and normalize the directory, propagating the first failure.
///
/// # Errors
/// Returns an error if the file cannot be read, the document is not a JSON
/// array of records, or any record fails to decode or normalize. One bad
/// record fails the whole load.
pub fn try_load_directory(path: &Path) -> Result<Vec<Family>> {
    log_operation_start("loading directory from", path);
    let bytes = safe_read_file(path, "loading the family directory")?;
    try_load_directory_from_slice(&bytes)
}

/// Decode and normalize a directory document from bytes.
///
/// # Errors
/// Same contract as [`try_load_directory`], minus the file access.
pub fn try_load_directory_from_slice(bytes: &[u8]) -> Result<Vec<Family>> {
    let records: Vec<FamilyRecord> = serde_json::from_slice(bytes)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| family_from_record(index, record))
        .collect()
}

/// Decode a directory document, keeping good records and dropping bad ones.
///
/// Each array element is decoded and normalized on its own, so a malformed
/// record is logged and skipped instead of blanking the whole directory.
/// Callers opt into this contract explicitly; the default entry points keep
/// the all-or-nothing behavior.
///
/// # Errors
/// Returns an error only if the document itself fails to parse as a JSON
/// array.
pub fn try_load_directory_lenient_from_slice(bytes: &[u8]) -> Result<Vec<Family>> {
    let values: Vec<Value> = serde_json::from_slice(bytes)?;
    let mut families = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let record: FamilyRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("skipping record {index}: {e}");
                continue;
            }
        };
        match family_from_record(index, record) {
            Ok(family) => families.push(family),
            Err(e) => log::warn!("skipping record {index}: {e}"),
        }
    }

    Ok(families)
}
