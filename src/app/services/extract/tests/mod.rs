//! Tests and shared sheet builders for the extraction service

mod cleaner_tests;

use crate::app::services::workbook::{Cell, Column, SheetTable};

/// Builder for test sheets pre-populated with a full column schema
pub struct SheetBuilder {
    name: &'static str,
    columns: Vec<Column>,
    n_rows: usize,
}

impl SheetBuilder {
    fn new(name: &'static str, schema: &[(&str, &str)], n_rows: usize) -> Self {
        let columns = schema
            .iter()
            .map(|(category, field)| Column {
                category: category.to_string(),
                field: field.to_string(),
                cells: vec![Cell::Empty; n_rows],
            })
            .collect();
        Self {
            name,
            columns,
            n_rows,
        }
    }

    /// Replace the cells of one column, identified by its exact header pair
    pub fn set(mut self, category: &str, field: &str, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), self.n_rows, "cell count must match row count");
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.category == category && c.field == field)
            .unwrap_or_else(|| panic!("no test column ({}, {})", category, field));
        column.cells = cells;
        self
    }

    /// Drop a column (for schema-mismatch tests)
    pub fn without(mut self, field: &str) -> Self {
        self.columns.retain(|c| c.field != field);
        self
    }

    /// Duplicate a column (for schema-mismatch tests)
    pub fn duplicated(mut self, field: &str) -> Self {
        let copy = self
            .columns
            .iter()
            .find(|c| c.field == field)
            .unwrap_or_else(|| panic!("no test column with field {}", field))
            .clone();
        self.columns.push(copy);
        self
    }

    pub fn build(self) -> SheetTable {
        SheetTable::new(self.name, self.columns)
    }
}

/// Full column schema of the `Lines` / `Tielines` sheets
pub fn lines_sheet(n_rows: usize) -> SheetBuilder {
    SheetBuilder::new(
        "Lines",
        &[
            ("General", "NE_name"),
            ("General", "EIC_Code"),
            ("General", "TSO"),
            ("Substation_1", "Full_name"),
            ("Substation_2", "Full_name"),
            ("General", "Voltage_level(kV)"),
            ("Maximum Current Imax (A)", "Fixed"),
            ("Maximum Current Imax (A)", "Period 1"),
            ("Maximum Current Imax (A)", "Period 2"),
            ("Maximum Current Imax (A)", "Period 3"),
            ("Maximum Current Imax (A)", "Period 4"),
            ("Maximum Current Imax (A)", "Period 5"),
            ("Maximum Current Imax (A)", "Period 6"),
            ("General", "DLRmin(A)"),
            ("General", "DLRmax(A)"),
            ("Electrical Parameters", "Resistance_R(Ω)"),
            ("Electrical Parameters", "Reactance_X(Ω)"),
            ("Electrical Parameters", "Susceptance_B(μS)"),
            ("General", "Length_(km)"),
            ("General", "Comment"),
        ],
        n_rows,
    )
}

/// Full column schema of the `Transformers` sheet
pub fn transformers_sheet(n_rows: usize) -> SheetBuilder {
    SheetBuilder::new(
        "Transformers",
        &[
            ("General", "Full Name"),
            ("General", "EIC_Code"),
            ("General", "TSO"),
            ("Maximum Current Imax (A) primary", "Fixed"),
            ("Maximum Current Imax (A) primary", "Min"),
            ("Maximum Current Imax (A) primary", "Max"),
            ("Electrical Parameters", "Resistance_R(Ω)"),
            ("Electrical Parameters", "Reactance_X(Ω)"),
            ("Electrical Parameters", "Susceptance_B (µS)"),
            ("Electrical Parameters", "Conductance_G (µS)"),
            ("Regulation", "Taps used for RAO"),
            ("Regulation", "Theta θ (°)"),
            ("Regulation", "Symmetrical/Asymmetrical"),
            ("Regulation", "Phase Regulation δu (%)"),
            ("Regulation", "Angle Regulation δu (%)"),
            ("General", "Comment"),
        ],
        n_rows,
    )
}

/// Shorthand for a text cell
pub fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

/// Shorthand for a numeric cell
pub fn number(value: f64) -> Cell {
    Cell::Number(value)
}
