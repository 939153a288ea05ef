use clap::Parser;
use std::process;
use ufo_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(command)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("UFO Processor - NUFORC Sighting Summaries");
    println!("=========================================");
    println!();
    println!("Aggregate NUFORC UFO sighting reports into yearly counts, top");
    println!("reporting locations and the oldest and newest sightings.");
    println!();
    println!("USAGE:");
    println!("    ufo-processor <COMMAND> <CSV> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Yearly series, top locations and extremal sightings");
    println!("    extremes    Oldest and newest sightings, formatted for display");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Full summary as text:");
    println!("    ufo-processor summary scrubbed.csv");
    println!();
    println!("    # Top 3 countries between 1950 and 2000, as JSON:");
    println!("    ufo-processor summary scrubbed.csv --top 3 --min-year 1950 --max-year 2000 --format json");
    println!();
    println!("    # Oldest and newest sightings only:");
    println!("    ufo-processor extremes scrubbed.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ufo-processor <COMMAND> --help");
}
