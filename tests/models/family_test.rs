//! Tests for the Family model surface

use crate::utils::{families_from, record};

#[test]
fn summary_is_the_list_row_string() {
    let families = families_from(&[record("Smith", "John Smith", "Jane Smith", &[])]);
    assert_eq!(families[0].summary(), "[Smith], John Smith, Jane Smith");
}

#[test]
fn child_count_tracks_materialized_slots() {
    let families = families_from(&[
        record("Smith", "John Smith", "Jane Smith", &[]),
        record(
            "Jones",
            "David Jones",
            "Mary Jones",
            &[("Ben", "6", "12"), ("Cara", "2", "8")],
        ),
    ]);

    assert!(!families[0].has_children());
    assert_eq!(families[0].child_count(), 0);
    assert!(families[1].has_children());
    assert_eq!(families[1].child_count(), 2);
}

#[test]
fn identifiers_differ_between_loads_of_the_same_data() {
    let wire = record("Smith", "John Smith", "Jane Smith", &[]);
    let first = families_from(&[wire.clone()]);
    let second = families_from(&[wire]);

    assert_ne!(first[0].id, second[0].id);
}
