//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use clap::{Parser, Subcommand};
use entities_geometry::FigureKind;

/// Base-12 calculator command-line arguments
#[derive(Parser, Debug)]
#[command(name = "twelve")]
#[command(about = "Base-12 arithmetic and quadrilateral figures")]
#[command(version)]
pub struct CalculatorArgs {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Calculator subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add two base-12 numbers
    Add { a: String, b: String },

    /// Subtract the second base-12 number from the first
    Sub { a: String, b: String },

    /// Compare two base-12 numbers
    Cmp { a: String, b: String },

    /// Convert a base-12 number to decimal
    ToDecimal { value: String },

    /// Convert a decimal number to base 12
    FromDecimal { value: u64 },

    /// Run the A5 / 17B walkthrough
    Demo,

    /// Print a figure with its area and center
    Shape {
        /// square, rectangle or trapezoid
        kind: FigureKind,

        /// Eight coordinates x1 y1 ... x4 y4 (defaults when omitted)
        #[arg(allow_negative_numbers = true)]
        coords: Vec<String>,
    },
}
