//! Command-line argument definitions for the TSO processor

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the TSO grid export processor
///
/// Converts multi-country TSO static grid model spreadsheet exports into
/// normalized line, transformer and bus tables as CSV.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tso-processor",
    version,
    about = "Convert TSO static grid model spreadsheets into normalized CSV tables",
    long_about = "Processes multi-sheet, multi-country TSO grid export workbooks into three \
                  normalized tables (lines, transformers, buses), deriving the bus set from \
                  line endpoints and optionally resolving bus coordinates through a throttled \
                  geocoding provider."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process grid export workbooks into normalized CSV tables
    Process(ProcessArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the YAML run configuration (regions, workbooks, geocoding)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to the YAML run configuration"
    )]
    pub config_path: PathBuf,

    /// Output directory for lines.csv, transformers.csv and buses.csv
    ///
    /// Will be created if it doesn't exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "./output",
        help = "Output directory for the three CSV tables"
    )]
    pub output_path: PathBuf,

    /// Skip geocoding regardless of the run configuration
    ///
    /// Buses are still derived; their coordinates stay unresolved. Useful
    /// for offline runs and tests.
    #[arg(long = "no-geocode", help = "Skip geocoding entirely")]
    pub no_geocode: bool,

    /// Override the minimum delay between geocoding provider calls
    #[arg(
        long = "geocode-delay",
        value_name = "SECONDS",
        help = "Minimum delay between geocoding calls in seconds"
    )]
    pub geocode_delay: Option<f64>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", help = "Only log warnings and errors")]
    pub quiet: bool,
}

impl ProcessArgs {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "--verbose and --quiet are mutually exclusive".to_string(),
            ));
        }
        if !self.config_path.exists() {
            return Err(Error::configuration(format!(
                "run configuration not found: {}",
                self.config_path.display()
            )));
        }
        if let Some(delay) = self.geocode_delay {
            if delay < 0.0 {
                return Err(Error::configuration(format!(
                    "--geocode-delay must be non-negative, got {}",
                    delay
                )));
            }
        }
        Ok(())
    }
}
