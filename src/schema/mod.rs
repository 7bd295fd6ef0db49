//! Wire schema for the bundled directory document
//!
//! The on-disk schema is label-keyed: each record is a flat JSON object whose
//! keys are human-readable labels ("Family Last Name", "Child 3 Grade") rather
//! than programmatic identifiers. Five numbered child slots each carry a
//! (name, grade, age) triple; the generator leaves unused slots as empty
//! strings, but hand-edited exports have been seen with slots missing
//! entirely or holding non-string values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number of child slots in every record
pub const CHILD_SLOTS: usize = 5;

/// One flat, label-keyed record as it appears in the source document.
///
/// The eight family-level fields are required; decoding a record fails if any
/// of them is missing or not a string. The fifteen child-slot fields decode
/// leniently to `None` instead: whether an absent grade or age is acceptable
/// depends on the slot's name, which is a normalization rule, not a wire rule
/// (see [`crate::models::adapters::family_from_record`]).
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyRecord {
    #[serde(rename = "Family Last Name")]
    pub family_last_name: String,
    #[serde(rename = "Father Name")]
    pub father_name: String,
    #[serde(rename = "Father Mobile")]
    pub father_mobile: String,
    #[serde(rename = "Father Email")]
    pub father_email: String,
    #[serde(rename = "Mother Name")]
    pub mother_name: String,
    #[serde(rename = "Mother Mobile")]
    pub mother_mobile: String,
    #[serde(rename = "Mother Email")]
    pub mother_email: String,
    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Child 1 Name", default, deserialize_with = "string_or_none")]
    pub child1_name: Option<String>,
    #[serde(rename = "Child 1 Grade", default, deserialize_with = "string_or_none")]
    pub child1_grade: Option<String>,
    #[serde(rename = "Child 1 Age", default, deserialize_with = "string_or_none")]
    pub child1_age: Option<String>,
    #[serde(rename = "Child 2 Name", default, deserialize_with = "string_or_none")]
    pub child2_name: Option<String>,
    #[serde(rename = "Child 2 Grade", default, deserialize_with = "string_or_none")]
    pub child2_grade: Option<String>,
    #[serde(rename = "Child 2 Age", default, deserialize_with = "string_or_none")]
    pub child2_age: Option<String>,
    #[serde(rename = "Child 3 Name", default, deserialize_with = "string_or_none")]
    pub child3_name: Option<String>,
    #[serde(rename = "Child 3 Grade", default, deserialize_with = "string_or_none")]
    pub child3_grade: Option<String>,
    #[serde(rename = "Child 3 Age", default, deserialize_with = "string_or_none")]
    pub child3_age: Option<String>,
    #[serde(rename = "Child 4 Name", default, deserialize_with = "string_or_none")]
    pub child4_name: Option<String>,
    #[serde(rename = "Child 4 Grade", default, deserialize_with = "string_or_none")]
    pub child4_grade: Option<String>,
    #[serde(rename = "Child 4 Age", default, deserialize_with = "string_or_none")]
    pub child4_age: Option<String>,
    #[serde(rename = "Child 5 Name", default, deserialize_with = "string_or_none")]
    pub child5_name: Option<String>,
    #[serde(rename = "Child 5 Grade", default, deserialize_with = "string_or_none")]
    pub child5_grade: Option<String>,
    #[serde(rename = "Child 5 Age", default, deserialize_with = "string_or_none")]
    pub child5_age: Option<String>,
}

/// A child slot's (name, grade, age) triple
pub type ChildSlot = (Option<String>, Option<String>, Option<String>);

impl FamilyRecord {
    /// Take the five child slots out of the record, in ascending slot order
    #[must_use]
    pub fn take_child_slots(&mut self) -> [ChildSlot; CHILD_SLOTS] {
        [
            (
                self.child1_name.take(),
                self.child1_grade.take(),
                self.child1_age.take(),
            ),
            (
                self.child2_name.take(),
                self.child2_grade.take(),
                self.child2_age.take(),
            ),
            (
                self.child3_name.take(),
                self.child3_grade.take(),
                self.child3_age.take(),
            ),
            (
                self.child4_name.take(),
                self.child4_grade.take(),
                self.child4_age.take(),
            ),
            (
                self.child5_name.take(),
                self.child5_grade.take(),
                self.child5_age.take(),
            ),
        ]
    }
}

/// Decode a field that should hold a string but may be absent, `null`, or of
/// the wrong type; anything but a string becomes `None`.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
