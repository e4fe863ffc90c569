//! Tests for canonical bus name derivation

use crate::app::services::bus_builder::{buses_from_lines, canonical_name};
use crate::app::models::LineRecord;

fn line(bus0: &str, bus1: &str, country: &str) -> LineRecord {
    LineRecord {
        bus0: Some(bus0.to_string()),
        bus1: Some(bus1.to_string()),
        country: Some(country.to_string()),
        ..LineRecord::default()
    }
}

#[test]
fn test_buses_from_two_regions_keep_countries_distinct() {
    let lines = vec![line("Alpha", "Beta", "XX"), line("Beta", "Gamma", "YY")];

    let buses = buses_from_lines(&lines);
    assert_eq!(buses, vec!["Alpha XX", "Beta XX", "Beta YY", "Gamma YY"]);
}

#[test]
fn test_buses_are_deduplicated_and_sorted() {
    let lines = vec![
        line("Zeta", "Alpha", "XX"),
        line("Alpha", "Zeta", "XX"),
        line(" Alpha ", "Mid", "XX"),
    ];

    let buses = buses_from_lines(&lines);
    assert_eq!(buses, vec!["Alpha XX", "Mid XX", "Zeta XX"]);
}

#[test]
fn test_buses_determinism_on_repeated_runs() {
    let lines = vec![
        line("Delta", "Alpha", "XX"),
        line("Beta", "Gamma", "XX"),
        line("Gamma", "Delta", "XX"),
    ];

    let first = buses_from_lines(&lines);
    let second = buses_from_lines(&lines);
    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
}

#[test]
fn test_buses_skip_missing_endpoints_and_country() {
    let mut incomplete = line("Alpha", "Beta", "XX");
    incomplete.bus1 = None;
    let mut no_country = line("Gamma", "Delta", "XX");
    no_country.country = None;

    let buses = buses_from_lines(&[incomplete, no_country]);
    assert_eq!(buses, vec!["Alpha XX"]);
}

#[test]
fn test_canonical_name_cleaning_sequence() {
    assert_eq!(canonical_name("Ober/Unter XX"), "Ober Unter XX");
    assert_eq!(canonical_name("Y-Marckolsheim FR"), "Marckolsheim FR");
    assert_eq!(canonical_name("North - South XX"), "North South XX");
    assert_eq!(canonical_name("Alpha (380) XX"), "Alpha 380 XX");
}

#[test]
fn test_canonical_name_splits_compound_words() {
    assert_eq!(canonical_name("WolmirstedtHelmstedt XX"), "Wolmirstedt Helmstedt XX");
}

#[test]
fn test_canonical_name_german_transliteration_only_for_de_at() {
    assert_eq!(canonical_name("Huertgen DE"), "Hürtgen DE");
    assert_eq!(canonical_name("Paernu AT"), "Pärnu AT");
    // No transliteration outside DE/AT
    assert_eq!(canonical_name("Huertgen FR"), "Huertgen FR");
}

#[test]
fn test_canonical_name_data_patches_repair_collisions() {
    // "Itzehoe" would transliterate to "Itzehö"; the patch restores the town name
    assert_eq!(canonical_name("Itzehoe DE"), "Itzehoe DE");
    assert_eq!(canonical_name("Dauersberg DE"), "Dauersberg DE");
}

#[test]
fn test_canonical_name_idempotent() {
    let inputs = [
        "Ober/Unter (380) XX",
        "Itzehoe DE",
        "Dauersberg DE",
        "Huertgen DE",
        "WolmirstedtHelmstedt XX",
        "Y-Marckolsheim FR",
    ];
    for input in inputs {
        let once = canonical_name(input);
        let twice = canonical_name(&once);
        assert_eq!(once, twice, "canonicalization not idempotent for {input:?}");
    }
}
