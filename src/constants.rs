//! Application constants for the TSO grid export processor
//!
//! This module contains the fixed sheet names, unit conversion factors,
//! name-normalization tables and geocoding defaults used throughout the
//! application. The exact header and sheet strings are part of the source
//! data contract; any mismatch is a schema error, not something to repair.

// =============================================================================
// Workbook Layout
// =============================================================================

/// Sheet holding lines fully contained in one region
pub const SHEET_LINES: &str = "Lines";

/// Sheet holding lines crossing a regional boundary (same column schema)
pub const SHEET_TIELINES: &str = "Tielines";

/// Sheet holding transformers
pub const SHEET_TRANSFORMERS: &str = "Transformers";

/// All sheets a region workbook must provide
pub const REQUIRED_SHEETS: &[&str] = &[SHEET_LINES, SHEET_TIELINES, SHEET_TRANSFORMERS];

/// String cell values the source uses as missing-value sentinels
pub const NA_VALUES: &[&str] = &["-", ";"];

// =============================================================================
// Unit Conversion Factors
// =============================================================================

/// Source current ratings are amperes, records store kiloamperes
pub const AMPS_PER_KILOAMP: f64 = 1e3;

/// Source susceptance/conductance are micro-Siemens, records store Siemens
pub const MICROSIEMENS_PER_SIEMENS: f64 = 1e6;

/// Number of seasonal/period current rating columns on line sheets
pub const LINE_RATING_PERIODS: usize = 6;

// =============================================================================
// Bus Name Canonicalization
// =============================================================================

/// Country suffixes whose bus names get German orthography repairs
pub const GERMAN_NAME_SUFFIXES: &[&str] = &["DE", "AT"];

/// Transliteration substitutions applied to German/Austrian bus names.
///
/// The first three approximate German orthography; the last two are
/// name-specific data patches repairing transliteration collisions with
/// real town names. Applied in order.
pub const GERMAN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("ue", "ü"),
    ("ae", "ä"),
    ("oe", "ö"),
    ("Itzehö", "Itzehoe"),
    ("Daürsberg", "Dauersberg"),
];

// =============================================================================
// Geocoding
// =============================================================================

/// Default Nominatim endpoint
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// User agent sent with every geocoding request (Nominatim usage policy)
pub const GEOCODER_USER_AGENT: &str = concat!("tso_processor/", env!("CARGO_PKG_VERSION"));

/// Default minimum delay between successive provider calls, in seconds
pub const DEFAULT_GEOCODE_DELAY_SECS: f64 = 2.0;

/// Request timeout for a single provider call, in seconds
pub const GEOCODE_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Output Files
// =============================================================================

/// Output file name for the normalized line table
pub const OUTPUT_LINES: &str = "lines.csv";

/// Output file name for the normalized transformer table
pub const OUTPUT_TRANSFORMERS: &str = "transformers.csv";

/// Output file name for the derived bus table
pub const OUTPUT_BUSES: &str = "buses.csv";
