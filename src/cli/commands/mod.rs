//! Command implementations for the TSO processor CLI

pub mod process;
pub mod shared;

pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the appropriate subcommand handler
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        None => Err(Error::configuration("no command given".to_string())),
    }
}
