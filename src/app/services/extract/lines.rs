//! Line and tie-line extraction

use super::{amps_to_kiloamps, microsiemens_to_siemens, reciprocal_siemens};
use crate::app::models::LineRecord;
use crate::app::services::workbook::SheetTable;
use crate::constants::LINE_RATING_PERIODS;
use crate::Result;
use tracing::debug;

/// Build one normalized [`LineRecord`] per source row.
///
/// Works for both the `Lines` and `Tielines` sheets (identical schema).
/// `country` stamps every output row so identically named substations in
/// different countries stay distinct downstream.
pub fn extract_lines(sheet: &SheetTable, country: Option<&str>) -> Result<Vec<LineRecord>> {
    let name = sheet.column("NE_name")?.texts();
    let eic_code = sheet.column("EIC_Code")?.texts();
    let tso = sheet.column("TSO")?.texts();
    let bus0 = sheet.column_at("Substation_1", "Full_name")?.texts();
    let bus1 = sheet.column_at("Substation_2", "Full_name")?.texts();
    let v_nom = sheet.column("Voltage_level(kV)")?.numbers()?;

    let i_nom_fixed =
        amps_to_kiloamps(sheet.column_at("Maximum Current Imax (A)", "Fixed")?.numbers()?);
    let mut i_nom_periods = Vec::with_capacity(LINE_RATING_PERIODS);
    for period in 1..=LINE_RATING_PERIODS {
        let column = sheet.column_at("Maximum Current Imax (A)", &format!("Period {}", period))?;
        i_nom_periods.push(amps_to_kiloamps(column.numbers()?));
    }
    let i_nom_dlr_min = amps_to_kiloamps(sheet.column("DLRmin(A)")?.numbers()?);
    let i_nom_dlr_max = amps_to_kiloamps(sheet.column("DLRmax(A)")?.numbers()?);

    let r = sheet.column("Resistance_R(Ω)")?.numbers()?;
    let x = reciprocal_siemens("Reactance_X(Ω)", sheet.column("Reactance_X(Ω)")?.numbers()?)?;
    let b = microsiemens_to_siemens(sheet.column("Susceptance_B(μS)")?.numbers()?);
    let length = sheet.column("Length_(km)")?.numbers()?;
    let tag = sheet.column("Comment")?.texts();

    let n_rows = sheet.n_rows();
    let mut records = Vec::with_capacity(n_rows);
    for row in 0..n_rows {
        let mut periods = [None; LINE_RATING_PERIODS];
        for (slot, column) in periods.iter_mut().zip(&i_nom_periods) {
            *slot = column[row];
        }

        records.push(LineRecord {
            name: name[row].clone(),
            eic_code: eic_code[row].clone(),
            tso: tso[row].clone(),
            bus0: bus0[row].clone(),
            bus1: bus1[row].clone(),
            v_nom: v_nom[row],
            i_nom_fixed: i_nom_fixed[row],
            i_nom_periods: periods,
            i_nom_dlr_min: i_nom_dlr_min[row],
            i_nom_dlr_max: i_nom_dlr_max[row],
            r: r[row],
            x: x[row],
            b: b[row],
            length: length[row],
            tag: tag[row].clone(),
            country: country.map(str::to_string),
        });
    }

    debug!(
        "Extracted {} line records from sheet '{}'",
        records.len(),
        sheet.name()
    );

    Ok(records)
}
