use clap::Parser;
use poi_ingest::cli::{args::Args, commands};
use std::process;

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
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("POI Ingest - Community Map Marker Ingester");
    println!("==========================================");
    println!();
    println!("Ingest community-submitted points of interest from a published");
    println!("spreadsheet CSV export into validated, sorted marker records.");
    println!();
    println!("USAGE:");
    println!("    poi-ingest <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest        Ingest a CSV export into marker records (main command)");
    println!("    categories    List the known marker categories");
    println!("    locate        Resolve an approximate location from the current public IP");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest the published community sheet:");
    println!("    poi-ingest ingest");
    println!();
    println!("    # Ingest a local export and dump markers to JSON:");
    println!("    poi-ingest ingest --input export.csv --output markers.json");
    println!();
    println!("    # Machine-readable ingestion report:");
    println!("    poi-ingest ingest --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    poi-ingest <COMMAND> --help");
}
