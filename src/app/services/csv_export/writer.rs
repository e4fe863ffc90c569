//! CSV writers for the three output tables
//!
//! Output is pandas-compatible: the first column is an unnamed positional
//! index, missing values are empty fields, booleans render as `True`/`False`.

use crate::app::models::{BusRecord, LineRecord, TransformerRecord};
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Write the normalized line table
pub fn write_lines(path: &Path, lines: &[LineRecord]) -> Result<()> {
    let mut writer = open_writer(path)?;

    let mut header = vec![
        "", "name", "EIC_Code", "TSO", "bus0", "bus1", "v_nom", "i_nom_fixed",
    ]
    .into_iter()
    .map(str::to_string)
    .collect::<Vec<_>>();
    for period in 1..=crate::constants::LINE_RATING_PERIODS {
        header.push(format!("i_nom_{}", period));
    }
    header.extend(
        ["i_nom_dlr_min", "i_nom_dlr_max", "r", "x", "b", "length", "tag", "country"]
            .into_iter()
            .map(str::to_string),
    );
    write_record(&mut writer, path, &header)?;

    for (index, line) in lines.iter().enumerate() {
        let mut record = vec![
            index.to_string(),
            fmt_text(&line.name),
            fmt_text(&line.eic_code),
            fmt_text(&line.tso),
            fmt_text(&line.bus0),
            fmt_text(&line.bus1),
            fmt_number(line.v_nom),
            fmt_number(line.i_nom_fixed),
        ];
        record.extend(line.i_nom_periods.iter().map(|v| fmt_number(*v)));
        record.extend([
            fmt_number(line.i_nom_dlr_min),
            fmt_number(line.i_nom_dlr_max),
            fmt_number(line.r),
            fmt_number(line.x),
            fmt_number(line.b),
            fmt_number(line.length),
            fmt_text(&line.tag),
            fmt_text(&line.country),
        ]);
        write_record(&mut writer, path, &record)?;
    }

    finish(writer, path, lines.len(), "lines")
}

/// Write the normalized transformer table
pub fn write_transformers(path: &Path, transformers: &[TransformerRecord]) -> Result<()> {
    let mut writer = open_writer(path)?;

    write_record(
        &mut writer,
        path,
        &[
            "", "name", "EIC_Code", "TSO", "i_nom", "i_nom_min", "i_nom_max", "r", "x", "b", "g",
            "taps_lower", "taps_upper", "phase_shift", "symmetrical", "phase_regulation",
            "angle_regulation", "tag", "country",
        ],
    )?;

    for (index, transformer) in transformers.iter().enumerate() {
        write_record(
            &mut writer,
            path,
            &[
                index.to_string(),
                fmt_text(&transformer.name),
                fmt_text(&transformer.eic_code),
                fmt_text(&transformer.tso),
                fmt_number(transformer.i_nom),
                fmt_number(transformer.i_nom_min),
                fmt_number(transformer.i_nom_max),
                fmt_number(transformer.r),
                fmt_number(transformer.x),
                fmt_number(transformer.b),
                fmt_number(transformer.g),
                fmt_integer(transformer.taps_lower),
                fmt_integer(transformer.taps_upper),
                fmt_number(transformer.phase_shift),
                fmt_bool(transformer.symmetrical),
                fmt_number(transformer.phase_regulation),
                fmt_number(transformer.angle_regulation),
                fmt_text(&transformer.tag),
                fmt_text(&transformer.country),
            ],
        )?;
    }

    finish(writer, path, transformers.len(), "transformers")
}

/// Write the derived bus table
pub fn write_buses(path: &Path, buses: &[BusRecord]) -> Result<()> {
    let mut writer = open_writer(path)?;

    write_record(&mut writer, path, &["", "name", "x", "y", "address"])?;

    for (index, bus) in buses.iter().enumerate() {
        write_record(
            &mut writer,
            path,
            &[
                index.to_string(),
                bus.name.clone(),
                fmt_number(bus.x),
                fmt_number(bus.y),
                fmt_text(&bus.address),
            ],
        )?;
    }

    finish(writer, path, buses.len(), "buses")
}

fn open_writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::Writer::from_path(path).map_err(|e| {
        Error::csv_writing(
            path.display().to_string(),
            "failed to create output file",
            Some(e),
        )
    })
}

fn write_record<I, T>(writer: &mut csv::Writer<std::fs::File>, path: &Path, record: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer.write_record(record).map_err(|e| {
        Error::csv_writing(path.display().to_string(), "failed to write record", Some(e))
    })
}

fn finish(
    mut writer: csv::Writer<std::fs::File>,
    path: &Path,
    rows: usize,
    table: &str,
) -> Result<()> {
    writer.flush().map_err(|e| {
        Error::csv_writing(
            path.display().to_string(),
            "failed to flush output file",
            Some(csv::Error::from(e)),
        )
    })?;
    info!("Wrote {} {} to {}", rows, table, path.display());
    Ok(())
}

fn fmt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn fmt_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn fmt_integer(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn fmt_bool(value: Option<bool>) -> String {
    match value {
        Some(true) => "True".to_string(),
        Some(false) => "False".to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{BusRecord, LineRecord, TransformerRecord};
    use tempfile::tempdir;

    #[test]
    fn test_write_buses_row_indexed_with_missing_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("buses.csv");

        let buses = vec![
            BusRecord {
                name: "Alpha XX".to_string(),
                x: Some(7.5),
                y: Some(48.25),
                address: Some("Alpha, XX".to_string()),
            },
            BusRecord::unresolved("Beta XX"),
        ];

        write_buses(&path, &buses).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], ",name,x,y,address");
        assert_eq!(lines[1], "0,Alpha XX,7.5,48.25,\"Alpha, XX\"");
        assert_eq!(lines[2], "1,Beta XX,,,");
    }

    #[test]
    fn test_write_lines_header_and_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.csv");

        let line = LineRecord {
            name: Some("L1".to_string()),
            v_nom: Some(380.0),
            x: Some(0.5),
            country: Some("DE".to_string()),
            ..LineRecord::default()
        };
        write_lines(&path, &[line]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            ",name,EIC_Code,TSO,bus0,bus1,v_nom,i_nom_fixed,i_nom_1,i_nom_2,i_nom_3,\
             i_nom_4,i_nom_5,i_nom_6,i_nom_dlr_min,i_nom_dlr_max,r,x,b,length,tag,country"
        );
        assert!(lines[1].starts_with("0,L1,"));
        assert!(lines[1].ends_with(",DE"));
    }

    #[test]
    fn test_write_transformers_booleans_render_like_pandas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transformers.csv");

        let transformers = vec![
            TransformerRecord {
                name: Some("T1".to_string()),
                symmetrical: Some(false),
                taps_lower: Some(-10),
                taps_upper: Some(10),
                ..TransformerRecord::default()
            },
            TransformerRecord {
                name: Some("T2".to_string()),
                symmetrical: Some(true),
                ..TransformerRecord::default()
            },
        ];
        write_transformers(&path, &transformers).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[1].contains(",-10,10,,False,"));
        assert!(lines[2].contains(",True,"));
    }
}
