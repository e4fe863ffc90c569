//! Column-wise extraction of normalized records from source sheets
//!
//! Each output column is produced by selecting the matching source column
//! (shape-asserted: exactly one match) and applying one cleaning or unit
//! conversion function across all rows; rows are then zipped into immutable
//! records. Unit factors are load-bearing: source amperes become kA (/1e3),
//! source micro-Siemens become S (/1e6), and the stored `x` is the
//! reciprocal of the source reactance.

pub mod cleaners;
pub mod lines;
pub mod transformers;

#[cfg(test)]
pub mod tests;

pub use lines::extract_lines;
pub use transformers::extract_transformers;

use crate::constants::{AMPS_PER_KILOAMP, MICROSIEMENS_PER_SIEMENS};
use crate::{Error, Result};

/// Convert a column of source amperes into kiloamperes
pub(crate) fn amps_to_kiloamps(values: Vec<Option<f64>>) -> Vec<Option<f64>> {
    values
        .into_iter()
        .map(|v| v.map(|amps| amps / AMPS_PER_KILOAMP))
        .collect()
}

/// Convert a column of source micro-Siemens into Siemens
pub(crate) fn microsiemens_to_siemens(values: Vec<Option<f64>>) -> Vec<Option<f64>> {
    values
        .into_iter()
        .map(|v| v.map(|us| us / MICROSIEMENS_PER_SIEMENS))
        .collect()
}

/// Convert a column of source reactances (Ω) into their reciprocals (S).
///
/// A source value of exactly 0 has no defined reciprocal; storing an
/// infinity would silently corrupt downstream electrical calculations, so
/// it is rejected as a malformed field.
pub(crate) fn reciprocal_siemens(field: &str, values: Vec<Option<f64>>) -> Result<Vec<Option<f64>>> {
    values
        .into_iter()
        .map(|v| match v {
            None => Ok(None),
            Some(ohms) if ohms == 0.0 => Err(Error::malformed_field(
                field,
                "0",
                "zero reactance has no reciprocal",
            )),
            Some(ohms) => Ok(Some(1.0 / ohms)),
        })
        .collect()
}
