//! Cleaning functions for single raw cell values
//!
//! These are pure functions turning one inconsistent source encoding into a
//! typed value. Missing input always propagates as missing output; a present
//! value that cannot be cleaned is a malformed-field error, since silently
//! fabricating a value would corrupt downstream electrical calculations.

use crate::app::services::workbook::Cell;
use crate::{Error, Result};

/// Map the free-text symmetry tag to a boolean.
///
/// Missing stays missing; text containing "asym" (case-insensitive) means
/// asymmetrical; any other present value is taken as symmetrical.
pub fn clean_symmetrical(cell: &Cell) -> Option<bool> {
    cell.as_text()
        .map(|text| !text.to_lowercase().contains("asym"))
}

/// Parse a compound tap-range string (e.g. `"<-10;+10>"` or `"-13/+13"`)
/// into its integer bounds.
///
/// Missing input and a numerically zero value both mean "no tap range" and
/// yield `(None, None)`. Otherwise the string must reduce to exactly two
/// integer tokens with `lower <= upper`; anything else is malformed.
pub fn clean_taps(cell: &Cell) -> Result<(Option<i64>, Option<i64>)> {
    if matches!(cell, Cell::Empty) || cell.is_numeric_zero() {
        return Ok((None, None));
    }

    let raw = match cell.as_text() {
        Some(text) => text,
        None => return Ok((None, None)),
    };

    let cleaned = raw.replace(['<', '>'], "").replace('/', ";");
    let tokens: Vec<&str> = cleaned.trim().split(';').collect();

    if tokens.len() != 2 {
        return Err(Error::malformed_field(
            "taps",
            &raw,
            format!("expected 2 tap tokens, found {}", tokens.len()),
        ));
    }

    let mut bounds = [0i64; 2];
    for (slot, token) in bounds.iter_mut().zip(&tokens) {
        *slot = token.trim().parse::<i64>().map_err(|_| {
            Error::malformed_field("taps", &raw, format!("invalid tap step '{}'", token.trim()))
        })?;
    }

    let (lower, upper) = (bounds[0], bounds[1]);
    if lower > upper {
        return Err(Error::malformed_field(
            "taps",
            &raw,
            format!("tap range is inverted ({} > {})", lower, upper),
        ));
    }

    Ok((Some(lower), Some(upper)))
}
