//! Frameworks Layer: Calculator
//!
//! Command-line driver for the entities crates. It parses arguments with clap,
//! runs base-12 arithmetic through `entities_utilities::Twelve` and builds figures
//! through `entities_geometry`.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: `CalculatorArgs` and the `Command` subcommands
//! - **[`commands`](commands/index.html)**: `execute`, which turns a command into
//!   output lines or a `CalculatorError`
//!
//! ## Commands
//!
//! ```text
//! twelve add A5 17B          # A5 + 17B = 264
//! twelve sub 17B A5          # 17B - A5 = 96
//! twelve cmp B2 1A5          # B2 < 1A5
//! twelve to-decimal BBBB     # BBBB = 20735
//! twelve from-decimal 144    # 144 = 100
//! twelve demo
//! twelve shape trapezoid 0 0 4 0 3 2 1 2
//! ```
//!
//! Logging goes to stderr. The level defaults to `warn` and follows `RUST_LOG`;
//! `--verbose` forces `debug` and `--quiet` turns it off.

pub mod args;
pub mod commands;

pub use args::{CalculatorArgs, Command};
pub use commands::{execute, CalculatorError};
