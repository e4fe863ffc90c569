//! Processing pipeline: regions in, three normalized tables out
//!
//! Extraction order is deterministic: regions in configuration order, rows
//! in source order, `Lines` before `Tielines` within a region. Buses are
//! derived only after every region's lines are merged so that cross-region
//! endpoint matches are found. Geocoding is optional and strictly
//! sequential; a single bus failing to resolve never aborts the run.

use crate::app::models::{BusRecord, LineRecord, TransformerRecord};
use crate::app::services::bus_builder::buses_from_lines;
use crate::app::services::extract::{extract_lines, extract_transformers};
use crate::app::services::geocode::{resolve_location, Geocoder};
use crate::app::services::workbook::{load_workbook, RegionWorkbook};
use crate::config::RunConfig;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// The three normalized output tables
#[derive(Debug, Clone)]
pub struct GridTables {
    pub lines: Vec<LineRecord>,
    pub transformers: Vec<TransformerRecord>,
    pub buses: Vec<BusRecord>,
}

impl GridTables {
    /// Number of buses with resolved coordinates
    pub fn buses_located(&self) -> usize {
        self.buses.iter().filter(|b| b.x.is_some()).count()
    }
}

/// Run the full pipeline over the configured regions.
///
/// Pass a geocoder to resolve bus coordinates; pass `None` to skip all
/// external calls (offline and test runs).
pub async fn run_pipeline(
    config: &RunConfig,
    geocoder: Option<&dyn Geocoder>,
) -> Result<GridTables> {
    let mut regions = Vec::with_capacity(config.regions.len());
    for region in &config.regions {
        info!(
            "Loading region '{}' ({}) from {}",
            region.name,
            region.country,
            region.workbook.display()
        );
        let workbook = load_workbook(&region.workbook)?;
        regions.push((workbook, region.country.clone()));
    }

    assemble_tables(&regions, geocoder).await
}

/// Extract, concatenate, derive buses and (optionally) geocode.
///
/// Separated from [`run_pipeline`] so the full flow is exercisable on
/// in-memory workbooks.
pub async fn assemble_tables(
    regions: &[(RegionWorkbook, String)],
    geocoder: Option<&dyn Geocoder>,
) -> Result<GridTables> {
    let mut lines = Vec::new();
    let mut transformers = Vec::new();

    for (workbook, country) in regions {
        lines.extend(extract_lines(&workbook.lines, Some(country))?);
        lines.extend(extract_lines(&workbook.tielines, Some(country))?);
        transformers.extend(extract_transformers(&workbook.transformers, Some(country))?);
    }

    info!(
        "Extracted {} lines and {} transformers from {} regions",
        lines.len(),
        transformers.len(),
        regions.len()
    );

    let names = buses_from_lines(&lines);
    let buses = match geocoder {
        Some(provider) => geocode_buses(names, provider).await,
        None => names.into_iter().map(BusRecord::unresolved).collect(),
    };

    Ok(GridTables {
        lines,
        transformers,
        buses,
    })
}

/// Resolve every bus sequentially through the provider
async fn geocode_buses(names: Vec<String>, provider: &dyn Geocoder) -> Vec<BusRecord> {
    let progress = ProgressBar::new(names.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_message("geocoding buses");

    let mut buses = Vec::with_capacity(names.len());
    for name in names {
        let location = resolve_location(Some(&name), provider).await;
        buses.push(BusRecord {
            name,
            x: location.x,
            y: location.y,
            address: location.address,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    buses
}
