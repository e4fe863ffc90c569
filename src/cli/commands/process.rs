//! Process command implementation
//!
//! Orchestrates the complete workflow: configuration loading, per-region
//! extraction, bus derivation, optional geocoding, and CSV output.

use super::shared::{setup_logging, ProcessingStats};
use crate::app::services::csv_export::{write_buses, write_lines, write_transformers};
use crate::app::services::geocode::{Geocoder, NominatimClient, Throttled};
use crate::app::services::pipeline::run_pipeline;
use crate::cli::args::ProcessArgs;
use crate::config::RunConfig;
use crate::constants::{OUTPUT_BUSES, OUTPUT_LINES, OUTPUT_TRANSFORMERS};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Duration;
use std::time::Instant;
use tracing::info;

/// Run the process command
pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting TSO grid export processing");
    args.validate()?;

    let config = RunConfig::from_file(&args.config_path)?;

    std::fs::create_dir_all(&args.output_path).map_err(|e| {
        Error::io(
            format!(
                "failed to create output directory '{}'",
                args.output_path.display()
            ),
            e,
        )
    })?;

    let geocoder = build_geocoder(&args, &config)?;
    let tables = run_pipeline(&config, geocoder.as_deref()).await?;

    write_lines(&args.output_path.join(OUTPUT_LINES), &tables.lines)?;
    write_transformers(
        &args.output_path.join(OUTPUT_TRANSFORMERS),
        &tables.transformers,
    )?;
    write_buses(&args.output_path.join(OUTPUT_BUSES), &tables.buses)?;

    let stats = ProcessingStats {
        regions_processed: config.regions.len(),
        lines_extracted: tables.lines.len(),
        transformers_extracted: tables.transformers.len(),
        buses_derived: tables.buses.len(),
        buses_located: tables.buses_located(),
        processing_time: start_time.elapsed(),
    };

    report_summary(&args, &stats);
    Ok(stats)
}

/// Build the throttled geocoding provider, or `None` when geocoding is
/// disabled by configuration or the command line.
fn build_geocoder(args: &ProcessArgs, config: &RunConfig) -> Result<Option<Box<dyn Geocoder>>> {
    if args.no_geocode || !config.geocode {
        info!("Geocoding disabled; buses will carry no coordinates");
        return Ok(None);
    }

    let delay_secs = args.geocode_delay.unwrap_or(config.geocode_delay_secs);
    let client = NominatimClient::new()?;
    let throttled = Throttled::new(client, Duration::from_secs_f64(delay_secs));
    info!(
        "Geocoding enabled with a minimum inter-call delay of {}s",
        delay_secs
    );
    Ok(Some(Box::new(throttled)))
}

fn report_summary(args: &ProcessArgs, stats: &ProcessingStats) {
    if args.quiet {
        return;
    }

    println!();
    println!("{}", "Processing complete".green().bold());
    println!(
        "  {} regions -> {} lines, {} transformers, {} buses ({} located)",
        stats.regions_processed,
        stats.lines_extracted,
        stats.transformers_extracted,
        stats.buses_derived,
        stats.buses_located
    );
    println!(
        "  finished in {}",
        HumanDuration(stats.processing_time).to_string().cyan()
    );
}
