use clap::Parser;
use std::process;
use swpc_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SWPC Processor - NOAA Space Weather Feed Converter");
    println!("==================================================");
    println!();
    println!("Convert NOAA Space Weather Prediction Center text feeds into");
    println!("structured JSON and CSV records.");
    println!();
    println!("USAGE:");
    println!("    swpc_processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    geomag      Convert a daily geomagnetic index bulletin to JSON");
    println!("    flux        Extract columns from a GOES particle-flux CSV dump");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch and convert the current SWPC bulletin:");
    println!("    swpc_processor geomag");
    println!();
    println!("    # Convert a local bulletin, wrapping records in a JSON array:");
    println!("    swpc_processor geomag --file quar_DGD.txt --array");
    println!();
    println!("    # Print the output JSON Schema without reading any input:");
    println!("    swpc_processor geomag --schema");
    println!();
    println!("    # Extract two columns from a GOES flux dump:");
    println!("    swpc_processor flux -f g15_epead_cpflux_5m.csv -w time_tag,ZPGT1E");
    println!();
    println!("For detailed help on any command, use:");
    println!("    swpc_processor <COMMAND> --help");
}
