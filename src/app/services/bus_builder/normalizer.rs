//! Canonical bus name derivation

use crate::app::models::LineRecord;
use crate::constants::{GERMAN_NAME_SUFFIXES, GERMAN_SUBSTITUTIONS};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::debug;

/// Boundary where a lowercase letter runs directly into an uppercase one
/// (compound words concatenated by source formatting)
fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("static regex"))
}

/// Derive the deduplicated, sorted, canonical bus name list from all line
/// endpoints.
///
/// Candidates are `"{trimmed endpoint} {country}"`, so identically named
/// substations in different countries stay distinct. Deduplication and the
/// canonical sort order apply to the raw candidates; canonicalization runs
/// afterwards, per name. Endpoints without a name or country contribute
/// nothing (a nameless bus cannot serve as a join key).
pub fn buses_from_lines(lines: &[LineRecord]) -> Vec<String> {
    let mut candidates = BTreeSet::new();
    for line in lines {
        if let Some(country) = &line.country {
            for endpoint in [&line.bus0, &line.bus1].into_iter().flatten() {
                candidates.insert(format!("{} {}", endpoint.trim(), country));
            }
        }
    }

    let buses: Vec<String> = candidates.iter().map(|name| canonical_name(name)).collect();
    debug!("Derived {} buses from {} lines", buses.len(), lines.len());
    buses
}

/// Canonicalize one bus name.
///
/// Applied identically to derived bus names and to line endpoints when they
/// are joined against the bus table; the two sides must never diverge.
pub fn canonical_name(name: &str) -> String {
    let mut cleaned = name
        .replace('/', " ")
        .replace("Y-", "")
        .replace(" - ", " ")
        .replace(['(', ')'], "");

    cleaned = camel_boundary()
        .replace_all(&cleaned, "$1 $2")
        .into_owned();

    if GERMAN_NAME_SUFFIXES
        .iter()
        .any(|suffix| cleaned.ends_with(suffix))
    {
        for (from, to) in GERMAN_SUBSTITUTIONS {
            cleaned = cleaned.replace(from, to);
        }
    }

    cleaned
}
