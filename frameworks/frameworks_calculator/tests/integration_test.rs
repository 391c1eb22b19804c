//! Integration tests for frameworks_calculator
//!
//! Parses full command lines and runs them, as the binary does.

use clap::Parser;
use frameworks_calculator::*;

fn run(argv: &[&str]) -> Result<Vec<String>, CalculatorError> {
    let args = CalculatorArgs::try_parse_from(argv).expect("arguments should parse");
    execute(&args.command)
}

#[test]
fn test_command_lines() {
    assert_eq!(run(&["twelve", "add", "a5", "17b"]).unwrap(), vec!["A5 + 17B = 264"]);
    assert_eq!(run(&["twelve", "sub", "1A5", "B2"]).unwrap(), vec!["1A5 - B2 = B3"]);
    assert_eq!(run(&["twelve", "cmp", "1A5", "B2"]).unwrap(), vec!["1A5 > B2"]);
    assert_eq!(run(&["twelve", "from-decimal", "12345"]).unwrap(), vec!["12345 = 7189"]);
    assert_eq!(run(&["twelve", "to-decimal", "7189"]).unwrap(), vec!["7189 = 12345"]);
}

#[test]
fn test_errors_are_descriptive() {
    let err = run(&["twelve", "add", "1G5", "1"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid base-12 character 'G' at position 1");

    let err = run(&["twelve", "sub", "B2", "1A5"]).unwrap_err();
    assert_eq!(err.to_string(), "negative result: 134 - 269");

    let err = run(&["twelve", "add", "18446744073709551615", "0"]);
    // Decimal digits are valid base-12 digits; the value is just too large
    assert!(matches!(err, Err(CalculatorError::Twelve(entities_utilities::TwelveError::Overflow))));
}

#[test]
fn test_shape_command_line() {
    let out = run(&["twelve", "shape", "square", "-1", "-1", "1", "-1", "1", "1", "-1", "1"]).unwrap();
    assert_eq!(out[0], "Square: (-1,-1) (1,-1) (1,1) (-1,1)");
    assert_eq!(out[1], "area: 4");
    assert_eq!(out[2], "center: (0,0)");
}
