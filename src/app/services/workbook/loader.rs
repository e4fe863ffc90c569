//! Calamine-backed loading of region workbooks

use super::sheet::{Cell, Column, SheetTable};
use crate::constants::{NA_VALUES, SHEET_LINES, SHEET_TIELINES, SHEET_TRANSFORMERS};
use crate::{Error, Result};
use calamine::{open_workbook, DataType, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

/// The three sheets of one region's grid export
#[derive(Debug, Clone)]
pub struct RegionWorkbook {
    pub lines: SheetTable,
    pub tielines: SheetTable,
    pub transformers: SheetTable,
}

/// Load a region workbook from disk.
///
/// All three required sheets must be present; a missing sheet is a fatal
/// workbook error (the source contract is violated).
pub fn load_workbook(path: &Path) -> Result<RegionWorkbook> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        Error::workbook(
            path.display().to_string(),
            "failed to open workbook",
            Some(e),
        )
    })?;

    let lines = load_sheet(&mut workbook, path, SHEET_LINES)?;
    let tielines = load_sheet(&mut workbook, path, SHEET_TIELINES)?;
    let transformers = load_sheet(&mut workbook, path, SHEET_TRANSFORMERS)?;

    Ok(RegionWorkbook {
        lines,
        tielines,
        transformers,
    })
}

fn load_sheet(workbook: &mut Xlsx<impl std::io::Read + std::io::Seek>, path: &Path, sheet_name: &str) -> Result<SheetTable> {
    let range = workbook
        .worksheet_range(sheet_name)
        .ok_or_else(|| {
            Error::workbook(
                path.display().to_string(),
                format!("missing required sheet '{}'", sheet_name),
                None,
            )
        })?
        .map_err(|e| {
            Error::workbook(
                path.display().to_string(),
                format!("failed to read sheet '{}'", sheet_name),
                Some(e),
            )
        })?;

    let mut rows = range.rows();
    let category_row = rows.next().ok_or_else(|| {
        Error::workbook(
            path.display().to_string(),
            format!("sheet '{}' has no category header row", sheet_name),
            None,
        )
    })?;
    let field_row = rows.next().ok_or_else(|| {
        Error::workbook(
            path.display().to_string(),
            format!("sheet '{}' has no field header row", sheet_name),
            None,
        )
    })?;

    let headers = two_level_headers(category_row, field_row);
    let data_rows: Vec<&[DataType]> = rows.collect();

    let mut columns = Vec::with_capacity(headers.len());
    for (index, category, field) in headers {
        let cells = data_rows
            .iter()
            .map(|row| convert_cell(row.get(index).unwrap_or(&DataType::Empty)))
            .collect();
        columns.push(Column {
            category,
            field,
            cells,
        });
    }

    debug!(
        "Loaded sheet '{}' from '{}': {} columns, {} rows",
        sheet_name,
        path.display(),
        columns.len(),
        data_rows.len()
    );

    Ok(SheetTable::new(sheet_name, columns))
}

/// Combine the two header rows into (column index, category, field) triples.
///
/// Merged category cells materialize only in their first column, so the
/// category level is forward-filled. Columns without a field name carry no
/// data and are dropped.
fn two_level_headers(
    category_row: &[DataType],
    field_row: &[DataType],
) -> Vec<(usize, String, String)> {
    let mut headers = Vec::new();
    let mut current_category = String::new();

    for (index, field_cell) in field_row.iter().enumerate() {
        if let Some(category) = header_text(category_row.get(index)) {
            current_category = category;
        }
        if let Some(field) = header_text(Some(field_cell)) {
            headers.push((index, current_category.clone(), field));
        }
    }

    headers
}

fn header_text(cell: Option<&DataType>) -> Option<String> {
    match cell {
        Some(DataType::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(DataType::Float(f)) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        Some(DataType::Float(f)) => Some(f.to_string()),
        Some(DataType::Int(i)) => Some(i.to_string()),
        _ => None,
    }
}

/// Map a calamine cell into our typed cell, applying the NA sentinels
pub(crate) fn convert_cell(data: &DataType) -> Cell {
    match data {
        DataType::Empty | DataType::Error(_) => Cell::Empty,
        DataType::Float(f) => Cell::Number(*f),
        DataType::Int(i) => Cell::Number(*i as f64),
        DataType::Bool(b) => Cell::Text(b.to_string()),
        DataType::DateTime(f) => Cell::Number(*f),
        DataType::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || NA_VALUES.contains(&trimmed) {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
    }
}
