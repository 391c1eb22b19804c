//! Base-12 Calculator Binary Entry Point
//!
//! Parses the command line, sets up logging and prints the result of one
//! command. Errors are reported on stderr with exit status 1.

use std::process;

use clap::Parser;
use frameworks_calculator::{execute, CalculatorArgs};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber with environment-based filtering.
///
/// - `quiet`: Suppress all logging output
/// - `verbose`: Enable debug-level logging
fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let args = CalculatorArgs::parse();

    init_tracing(args.quiet, args.verbose);

    match execute(&args.command) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
