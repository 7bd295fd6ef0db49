//! Record-to-model mapping
//!
//! This module converts flat wire records into domain models, one record at a
//! time, so callers can decide whether one bad record fails the whole load or
//! only itself.

use smallvec::SmallVec;
use uuid::Uuid;

use crate::error::{DirectoryError, Result};
use crate::models::{Child, Family};
use crate::schema::FamilyRecord;

/// Normalize one wire record into a [`Family`].
///
/// Child slots are walked in ascending order. A slot whose name is absent or
/// trims to empty is skipped without error; a slot with a populated name must
/// also carry a grade and an age, and the record fails if either is missing.
/// Surviving slots compact into a dense sequence that preserves slot order.
///
/// `index` is the record's position in the source array, used only for error
/// context.
///
/// # Errors
/// Returns [`DirectoryError::ChildSlot`] when a populated slot is half-filled.
pub fn family_from_record(index: usize, mut record: FamilyRecord) -> Result<Family> {
    let mut children = SmallVec::new();

    for (offset, (name, grade, age)) in record.take_child_slots().into_iter().enumerate() {
        let slot = offset + 1;
        let Some(name) = name else { continue };
        if name.trim().is_empty() {
            continue;
        }

        // Asymmetric from the name probe: a half-filled slot is a hard error.
        let grade = grade.ok_or(DirectoryError::ChildSlot {
            record: index,
            slot,
            label: "Grade",
        })?;
        let age = age.ok_or(DirectoryError::ChildSlot {
            record: index,
            slot,
            label: "Age",
        })?;

        children.push(Child::new(name, grade, age));
    }

    Ok(Family {
        id: Uuid::new_v4(),
        last_name: record.family_last_name,
        father_name: record.father_name,
        father_mobile: record.father_mobile,
        father_email: record.father_email,
        mother_name: record.mother_name,
        mother_mobile: record.mother_mobile,
        mother_email: record.mother_email,
        address: record.address,
        children,
    })
}
