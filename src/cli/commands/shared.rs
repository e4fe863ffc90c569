//! Shared components for CLI commands

use crate::cli::args::ProcessArgs;
use crate::Result;
use tracing::debug;

/// Processing statistics for end-of-run reporting
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of regions processed
    pub regions_processed: usize,
    /// Number of line records extracted (lines + tie-lines)
    pub lines_extracted: usize,
    /// Number of transformer records extracted
    pub transformers_extracted: usize,
    /// Number of buses derived from line endpoints
    pub buses_derived: usize,
    /// Number of buses with resolved coordinates
    pub buses_located: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging for the process command
pub fn setup_logging(args: &ProcessArgs) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tso_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
