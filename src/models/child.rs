//! Child entity model

use uuid::Uuid;

/// A dependent of a family, extracted from one populated child slot.
///
/// Grade and age are free-text labels straight from the source document and
/// are not necessarily numeric ("K", "3rd", "7 mo").
#[derive(Debug, Clone)]
pub struct Child {
    /// Generated identifier, unique within one load
    pub id: Uuid,
    /// Child's name
    pub name: String,
    /// Grade label
    pub grade: String,
    /// Age label
    pub age: String,
}

impl Child {
    /// Create a new child with a fresh identifier
    #[must_use]
    pub fn new(name: String, grade: String, age: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            grade,
            age,
        }
    }
}
