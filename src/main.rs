use clap::Parser;
use std::process;
use tso_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("TSO Processor - Grid Export Normalizer");
    println!("======================================");
    println!();
    println!("Convert multi-country TSO static grid model spreadsheet exports into");
    println!("normalized line, transformer and bus tables as CSV.");
    println!();
    println!("USAGE:");
    println!("    tso-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Process grid export workbooks into normalized CSV tables");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process the regions listed in a run configuration:");
    println!("    tso-processor process --config run.yaml --output ./output");
    println!();
    println!("    # Offline run without geocoding:");
    println!("    tso-processor process --config run.yaml --no-geocode");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tso-processor <COMMAND> --help");
}
