//! Bus derivation from line endpoints
//!
//! Buses are not listed in the source data; the node set is implied by the
//! union of line endpoint names. Derivation must run only after all regions'
//! lines are merged, otherwise cross-region endpoint matches are missed.

pub mod normalizer;

#[cfg(test)]
pub mod tests;

pub use normalizer::{buses_from_lines, canonical_name};
