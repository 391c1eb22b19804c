//! Command Execution Module
//!
//! Runs a parsed [`Command`] and returns the lines to print. Nothing here
//! writes to stdout, so every command can be checked from tests.

use entities_geometry::{figure::parse_points, GeometryError};
use entities_utilities::{Twelve, TwelveError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::args::Command;

/// Calculator errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// Base-12 parse or arithmetic failure
    #[error("{0}")]
    Twelve(#[from] TwelveError),
    /// Figure input failure
    #[error("{0}")]
    Geometry(#[from] GeometryError),
}

/// Execute a command, returning its output lines
pub fn execute(command: &Command) -> Result<Vec<String>, CalculatorError> {
    debug!(?command, "executing command");
    match command {
        Command::Add { a, b } => {
            let (x, y) = (parse(a)?, parse(b)?);
            Ok(vec![format!("{} + {} = {}", x, y, x.add(&y)?)])
        }
        Command::Sub { a, b } => {
            let (x, y) = (parse(a)?, parse(b)?);
            Ok(vec![format!("{} - {} = {}", x, y, x.sub(&y)?)])
        }
        Command::Cmp { a, b } => {
            let (x, y) = (parse(a)?, parse(b)?);
            Ok(vec![comparison_line(&x, &y)])
        }
        Command::ToDecimal { value } => {
            let x = parse(value)?;
            Ok(vec![format!("{} = {}", x, x.to_native()?)])
        }
        Command::FromDecimal { value } => {
            Ok(vec![format!("{} = {}", value, Twelve::from_native(*value))])
        }
        Command::Demo => demo(),
        Command::Shape { kind, coords } => {
            let figure = if coords.is_empty() {
                kind.build_default()
            } else {
                kind.build(parse_points(&coords.join(" "))?)
            };
            Ok(vec![
                figure.to_string(),
                format!("area: {}", figure.area()),
                format!("center: {}", figure.center()),
            ])
        }
    }
}

/// The A5 / 17B walkthrough
fn demo() -> Result<Vec<String>, CalculatorError> {
    let a = parse("A5")?;
    let b = parse("17B")?;

    let sum = a.add(&b)?;
    let difference = b.sub(&a)?;
    let copy = a.copy();

    Ok(vec![
        format!("{} + {} = {}", a, b, sum),
        format!("{} - {} = {}", b, a, difference),
        format!("copy of a: {}", copy),
        comparison_line(&a, &b),
    ])
}

fn comparison_line(x: &Twelve, y: &Twelve) -> String {
    let symbol = match x.compare_sign(y) {
        -1 => "<",
        0 => "==",
        _ => ">",
    };
    format!("{} {} {}", x, symbol, y)
}

fn parse(text: &str) -> Result<Twelve, CalculatorError> {
    Twelve::parse(text).map_err(|e| {
        warn!(input = text, error = %e, "rejected base-12 input");
        e.into()
    })
}
