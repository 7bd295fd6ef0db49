//! Tests for the sort+filter query contract

use uuid::Uuid;
use yellow_page::{Family, query};

use crate::utils::{families_from, record};

/// A small directory with deliberately mixed-case last names and one child
fn sample_directory() -> Vec<Family> {
    families_from(&[
        record("Smith", "John Smith", "Jane Smith", &[("Amy", "3", "9")]),
        record("anderson", "Peter Anderson", "Kate Miller", &[]),
        record(
            "Jones",
            "David Jones",
            "Mary Jones",
            &[("Ben", "6", "12"), ("Cara", "2", "8")],
        ),
        record("Becker", "Paul Becker", "Anna Becker", &[("Greta", "7", "13")]),
    ])
}

fn last_names(result: &[&Family]) -> Vec<String> {
    result.iter().map(|f| f.last_name.clone()).collect()
}

#[test]
fn empty_search_returns_every_family_sorted() {
    let families = sample_directory();
    let result = query(&families, "");

    assert_eq!(result.len(), families.len());
    assert_eq!(
        last_names(&result),
        vec!["anderson", "Becker", "Jones", "Smith"]
    );
}

#[test]
fn sort_is_case_insensitive_ascending_on_last_name() {
    let families = sample_directory();
    let result = query(&families, "");

    for pair in result.windows(2) {
        assert!(
            pair[0].last_name.to_lowercase() <= pair[1].last_name.to_lowercase(),
            "{} should not precede {}",
            pair[0].last_name,
            pair[1].last_name
        );
    }
}

#[test]
fn equal_sort_keys_keep_load_order() {
    let families = families_from(&[
        record("Smith", "Aaron Smith", "Beth Smith", &[]),
        record("Adams", "Carl Adams", "Dana Adams", &[]),
        record("SMITH", "Evan Smith", "Faye Smith", &[]),
        record("smith", "Gus Smith", "Hana Smith", &[]),
    ]);
    let result = query(&families, "");

    let fathers: Vec<&str> = result.iter().map(|f| f.father_name.as_str()).collect();
    assert_eq!(
        fathers,
        vec!["Carl Adams", "Aaron Smith", "Evan Smith", "Gus Smith"]
    );
}

#[test]
fn search_matches_each_criterion() {
    let families = sample_directory();

    // Last name only
    assert_eq!(last_names(&query(&families, "becker")), vec!["Becker"]);
    // Father's name only
    assert_eq!(last_names(&query(&families, "peter")), vec!["anderson"]);
    // Mother's name only
    assert_eq!(last_names(&query(&families, "miller")), vec!["anderson"]);
    // A child's name only
    assert_eq!(last_names(&query(&families, "cara")), vec!["Jones"]);
}

#[test]
fn search_is_plain_substring_containment() {
    let families = sample_directory();
    assert_eq!(last_names(&query(&families, "mit")), vec!["Smith"]);
    assert!(query(&families, "smith jones").is_empty());
}

#[test]
fn non_matching_families_contain_the_needle_nowhere() {
    let families = sample_directory();
    let needle = "an";
    let result = query(&families, needle);
    let kept: Vec<Uuid> = result.iter().map(|f| f.id).collect();

    for family in &families {
        let in_fields = family.last_name.to_lowercase().contains(needle)
            || family.father_name.to_lowercase().contains(needle)
            || family.mother_name.to_lowercase().contains(needle)
            || family
                .children
                .iter()
                .any(|c| c.name.to_lowercase().contains(needle));
        assert_eq!(
            kept.contains(&family.id),
            in_fields,
            "family {} filtered incorrectly",
            family.last_name
        );
    }
}

#[test]
fn search_case_variants_yield_identical_results() {
    let families = sample_directory();

    let lower: Vec<Uuid> = query(&families, "smith").iter().map(|f| f.id).collect();
    let upper: Vec<Uuid> = query(&families, "SMITH").iter().map(|f| f.id).collect();
    assert_eq!(lower, upper);
    assert!(!lower.is_empty());
}

#[test]
fn whitespace_only_search_filters_rather_than_resetting() {
    let families = sample_directory();

    // A single space matches full names, which all contain one.
    assert_eq!(query(&families, " ").len(), families.len());
    // Three spaces appear in no field, so everything filters out.
    assert!(query(&families, "   ").is_empty());
}

#[test]
fn query_never_mutates_the_input_collection() {
    let families = sample_directory();
    let before: Vec<Uuid> = families.iter().map(|f| f.id).collect();

    let _ = query(&families, "smith");
    let _ = query(&families, "");

    let after: Vec<Uuid> = families.iter().map(|f| f.id).collect();
    assert_eq!(before, after);
}
