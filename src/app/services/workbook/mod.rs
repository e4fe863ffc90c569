//! Region workbook loading and tabular source access
//!
//! A region's grid export is one `.xlsx` workbook containing the sheets
//! `Lines`, `Tielines` and `Transformers`, each with a two-level column
//! header (outer category, inner field name). This module turns those sheets
//! into in-memory [`SheetTable`]s and provides the shape-asserting column
//! accessors the extractors rely on: a selection that does not reduce to
//! exactly one source column is a fatal schema mismatch, never a fallback.

pub mod loader;
pub mod sheet;

#[cfg(test)]
pub mod tests;

pub use loader::{load_workbook, RegionWorkbook};
pub use sheet::{Cell, Column, SheetTable};
