//! Transformer extraction

use super::cleaners::{clean_symmetrical, clean_taps};
use super::{amps_to_kiloamps, microsiemens_to_siemens, reciprocal_siemens};
use crate::app::models::TransformerRecord;
use crate::app::services::workbook::SheetTable;
use crate::Result;
use tracing::debug;

/// Build one normalized [`TransformerRecord`] per source row.
///
/// Electrical parameters are taken at the primary, neutral-tap condition.
/// Tap ranges and the symmetry tag go through the field cleaners; a
/// malformed tap string aborts extraction rather than fabricating bounds.
pub fn extract_transformers(
    sheet: &SheetTable,
    country: Option<&str>,
) -> Result<Vec<TransformerRecord>> {
    let name = sheet.column("Full Name")?.texts();
    let eic_code = sheet.column("EIC_Code")?.texts();
    let tso = sheet.column("TSO")?.texts();

    let i_nom = amps_to_kiloamps(
        sheet
            .column_at("Maximum Current Imax (A) primary", "Fixed")?
            .numbers()?,
    );
    let i_nom_min = amps_to_kiloamps(
        sheet
            .column_at("Maximum Current Imax (A) primary", "Min")?
            .numbers()?,
    );
    let i_nom_max = amps_to_kiloamps(
        sheet
            .column_at("Maximum Current Imax (A) primary", "Max")?
            .numbers()?,
    );

    let r = sheet.column("Resistance_R(Ω)")?.numbers()?;
    let x = reciprocal_siemens("Reactance_X(Ω)", sheet.column("Reactance_X(Ω)")?.numbers()?)?;
    let b = microsiemens_to_siemens(sheet.column("Susceptance_B (µS)")?.numbers()?);
    let g = microsiemens_to_siemens(sheet.column("Conductance_G (µS)")?.numbers()?);

    let taps: Vec<(Option<i64>, Option<i64>)> = sheet
        .column("Taps used for RAO")?
        .cells
        .iter()
        .map(clean_taps)
        .collect::<Result<_>>()?;

    let phase_shift = sheet.column("Theta θ (°)")?.numbers()?;
    let symmetrical: Vec<Option<bool>> = sheet
        .column("Symmetrical/Asymmetrical")?
        .cells
        .iter()
        .map(clean_symmetrical)
        .collect();
    let phase_regulation = sheet.column("Phase Regulation δu (%)")?.numbers()?;
    let angle_regulation = sheet.column("Angle Regulation δu (%)")?.numbers()?;
    let tag = sheet.column("Comment")?.texts();

    let n_rows = sheet.n_rows();
    let mut records = Vec::with_capacity(n_rows);
    for row in 0..n_rows {
        let (taps_lower, taps_upper) = taps[row];

        records.push(TransformerRecord {
            name: name[row].clone(),
            eic_code: eic_code[row].clone(),
            tso: tso[row].clone(),
            i_nom: i_nom[row],
            i_nom_min: i_nom_min[row],
            i_nom_max: i_nom_max[row],
            r: r[row],
            x: x[row],
            b: b[row],
            g: g[row],
            taps_lower,
            taps_upper,
            phase_shift: phase_shift[row],
            symmetrical: symmetrical[row],
            phase_regulation: phase_regulation[row],
            angle_regulation: angle_regulation[row],
            tag: tag[row].clone(),
            country: country.map(str::to_string),
        });
    }

    debug!(
        "Extracted {} transformer records from sheet '{}'",
        records.len(),
        sheet.name()
    );

    Ok(records)
}
