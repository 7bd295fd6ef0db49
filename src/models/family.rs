//! Family unit representation
//!
//! This module contains the Family model, which represents one household entry
//! in the directory. A family carries both parents' contact details, a postal
//! address, and an ordered sequence of children compacted from the source's
//! numbered child slots.

use smallvec::SmallVec;
use uuid::Uuid;

use super::child::Child;

/// Maximum number of child slots in a source record
pub const MAX_CHILDREN: usize = 5;

/// One household entry in the directory.
///
/// All scalar fields are required plain text; construction happens once at
/// load time and the entry is never mutated afterwards. The identifier is
/// generated, not content-derived, and is stable only within one load.
#[derive(Debug, Clone)]
pub struct Family {
    /// Generated identifier, unique within one load
    pub id: Uuid,
    /// Family last name
    pub last_name: String,
    /// Father's full name
    pub father_name: String,
    /// Father's mobile number
    pub father_mobile: String,
    /// Father's email address
    pub father_email: String,
    /// Mother's full name
    pub mother_name: String,
    /// Mother's mobile number
    pub mother_mobile: String,
    /// Mother's email address
    pub mother_email: String,
    /// Postal address
    pub address: String,
    /// Children in slot order, gaps compacted away
    pub children: SmallVec<[Child; MAX_CHILDREN]>,
}

impl Family {
    /// Get number of children in the family
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if the family has any children on record
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// One-line list-row summary: `[<last name>], <father>, <mother>`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "[{}], {}, {}",
            self.last_name, self.father_name, self.mother_name
        )
    }
}
