//! Core data models for the normalized grid tables
//!
//! All records are created once during extraction and never mutated
//! afterwards. Legitimately absent source values are carried as `None`
//! through every field; extraction fails loudly instead of fabricating
//! values for malformed input.

use crate::constants::LINE_RATING_PERIODS;

/// One physical transmission line or tie-line.
///
/// Every unit-bearing field is stored in a single fixed unit (kA, Ω, S, kV,
/// km) regardless of which unit the source used.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineRecord {
    /// Network element name
    pub name: Option<String>,
    /// Energy Identification Code; may repeat or be absent
    pub eic_code: Option<String>,
    /// Operating transmission system operator
    pub tso: Option<String>,
    /// Raw endpoint substation name (pre-normalization)
    pub bus0: Option<String>,
    /// Raw endpoint substation name (pre-normalization)
    pub bus1: Option<String>,
    /// Nominal voltage \[kV\]
    pub v_nom: Option<f64>,
    /// Fixed maximum current rating \[kA\]
    pub i_nom_fixed: Option<f64>,
    /// Seasonal/period maximum current ratings \[kA\]
    pub i_nom_periods: [Option<f64>; LINE_RATING_PERIODS],
    /// Dynamic line rating lower bound \[kA\]
    pub i_nom_dlr_min: Option<f64>,
    /// Dynamic line rating upper bound \[kA\]
    pub i_nom_dlr_max: Option<f64>,
    /// Resistance \[Ω\]
    pub r: Option<f64>,
    /// Reciprocal of the source series reactance \[S\]
    pub x: Option<f64>,
    /// Shunt susceptance \[S\]
    pub b: Option<f64>,
    /// Line length \[km\]
    pub length: Option<f64>,
    /// Free-text comment
    pub tag: Option<String>,
    /// Country code assigned by the caller, not read from the sheet
    pub country: Option<String>,
}

/// One transformer, with electrical parameters at the primary, neutral-tap
/// condition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformerRecord {
    pub name: Option<String>,
    pub eic_code: Option<String>,
    pub tso: Option<String>,
    /// Fixed maximum primary current \[kA\]
    pub i_nom: Option<f64>,
    /// Minimum primary current rating \[kA\]
    pub i_nom_min: Option<f64>,
    /// Maximum primary current rating \[kA\]
    pub i_nom_max: Option<f64>,
    /// Resistance \[Ω\]
    pub r: Option<f64>,
    /// Reciprocal of the source reactance \[S\]
    pub x: Option<f64>,
    /// Susceptance \[S\]
    pub b: Option<f64>,
    /// Conductance \[S\]
    pub g: Option<f64>,
    /// Lower tap step bound; present iff `taps_upper` is present
    pub taps_lower: Option<i64>,
    /// Upper tap step bound; present iff `taps_lower` is present
    pub taps_upper: Option<i64>,
    /// Phase shift θ \[degrees\]
    pub phase_shift: Option<f64>,
    /// Symmetrical (true) or asymmetrical (false) regulation
    pub symmetrical: Option<bool>,
    /// Phase regulation δu \[%\]
    pub phase_regulation: Option<f64>,
    /// Angle regulation δu \[%\]
    pub angle_regulation: Option<f64>,
    pub tag: Option<String>,
    /// Country code assigned by the caller
    pub country: Option<String>,
}

/// A derived network node.
///
/// Buses are not present in the source data; one record exists per distinct
/// canonical name derived from the union of line endpoints across all
/// regions. Coordinates are absent until (and unless) geocoding resolves
/// them; an unresolved bus is a valid terminal state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct BusRecord {
    /// Canonicalized node name; the join key for line endpoints
    pub name: String,
    /// Longitude, if resolved
    pub x: Option<f64>,
    /// Latitude, if resolved
    pub y: Option<f64>,
    /// Resolved address string, present only on a successful lookup
    pub address: Option<String>,
}

impl BusRecord {
    /// Create a bus with unresolved coordinates
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: None,
            y: None,
            address: None,
        }
    }
}
