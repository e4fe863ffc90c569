//! In-memory representation of one two-level-header source sheet

use crate::{Error, Result};

/// A single source cell after NA-sentinel mapping.
///
/// The source mixes numeric and text cells freely within a column; typed
/// interpretation happens at extraction time so that a bad cell can name the
/// field it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Legitimately absent value (empty cell or NA sentinel)
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Interpret the cell as an optional number.
    ///
    /// Text that parses as a number is accepted (the exports occasionally
    /// store numeric columns as text); text that does not is a malformed
    /// field, not a missing value.
    pub fn as_number(&self, field: &str) -> Result<Option<f64>> {
        match self {
            Cell::Empty => Ok(None),
            Cell::Number(n) => Ok(Some(*n)),
            Cell::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| Error::malformed_field(field, s, "expected a number")),
        }
    }

    /// Interpret the cell as an optional text value
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Text(s) => Some(s.clone()),
        }
    }

    /// Whether the cell holds a value numerically equal to zero
    pub fn is_numeric_zero(&self) -> bool {
        match self {
            Cell::Number(n) => *n == 0.0,
            Cell::Text(s) => s.trim().parse::<f64>() == Ok(0.0),
            Cell::Empty => false,
        }
    }
}

/// Render a numeric cell the way it would have appeared as text
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One source column: its two-level header and all data cells
#[derive(Debug, Clone)]
pub struct Column {
    /// Outer header level (category)
    pub category: String,
    /// Inner header level (field name)
    pub field: String,
    pub cells: Vec<Cell>,
}

impl Column {
    /// All cells interpreted as optional numbers
    pub fn numbers(&self) -> Result<Vec<Option<f64>>> {
        self.cells.iter().map(|c| c.as_number(&self.field)).collect()
    }

    /// All cells interpreted as optional text
    pub fn texts(&self) -> Vec<Option<String>> {
        self.cells.iter().map(Cell::as_text).collect()
    }
}

/// One sheet of a region workbook in tabular form
#[derive(Debug, Clone)]
pub struct SheetTable {
    name: String,
    columns: Vec<Column>,
    n_rows: usize,
}

impl SheetTable {
    /// Build a table from pre-assembled columns.
    ///
    /// All columns must have the same length; the loader guarantees this and
    /// in-memory construction (tests) is expected to uphold it.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        let n_rows = columns.first().map(|c| c.cells.len()).unwrap_or(0);
        Self {
            name: name.into(),
            columns,
            n_rows,
        }
    }

    /// Sheet name (for error reporting)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Select the single column whose inner field name matches.
    ///
    /// Zero or multiple matches mean the source layout no longer matches the
    /// expected schema; there is no safe default, so this is fatal.
    pub fn column(&self, field: &str) -> Result<&Column> {
        let mut matches = self.columns.iter().filter(|c| c.field == field);
        match (matches.next(), matches.next()) {
            (Some(column), None) => Ok(column),
            (None, _) => Err(Error::schema_mismatch(&self.name, field, 0)),
            (Some(_), Some(_)) => {
                let count = self.columns.iter().filter(|c| c.field == field).count();
                Err(Error::schema_mismatch(&self.name, field, count))
            }
        }
    }

    /// Select the single column matching an exact (category, field) pair
    pub fn column_at(&self, category: &str, field: &str) -> Result<&Column> {
        let label = format!("{} / {}", category, field);
        let mut matches = self
            .columns
            .iter()
            .filter(|c| c.category == category && c.field == field);
        match (matches.next(), matches.next()) {
            (Some(column), None) => Ok(column),
            (None, _) => Err(Error::schema_mismatch(&self.name, label, 0)),
            (Some(_), Some(_)) => {
                let count = self
                    .columns
                    .iter()
                    .filter(|c| c.category == category && c.field == field)
                    .count();
                Err(Error::schema_mismatch(&self.name, label, count))
            }
        }
    }
}
