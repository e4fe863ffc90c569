//! Tests and shared builders for the workbook service


use super::sheet::{Cell, Column, SheetTable};

/// Build a single-column test table
pub fn single_column_table(
    sheet: &str,
    category: &str,
    field: &str,
    cells: Vec<Cell>,
) -> SheetTable {
    SheetTable::new(
        sheet,
        vec![Column {
            category: category.to_string(),
            field: field.to_string(),
            cells,
        }],
    )
}

/// Build a test column
pub fn column(category: &str, field: &str, cells: Vec<Cell>) -> Column {
    Column {
        category: category.to_string(),
        field: field.to_string(),
        cells,
    }
}
