//! Parsers for the values the session asks for
//!
//! Each parser takes one raw input line and either yields a value or an
//! `InvalidInput` error describing what was expected. They never panic.

use crate::errors::{BodyMetricsError, Result};
use crate::metrics::Gender;

fn invalid(expected: &str, input: &str) -> BodyMetricsError {
    BodyMetricsError::InvalidInput {
        expected: expected.to_string(),
        input: input.to_string(),
    }
}

/// A finite number greater than zero
pub fn parse_positive_real(input: &str) -> Result<f64> {
    const EXPECTED: &str = "a positive number";

    let value: f64 = input.trim().parse().map_err(|_| invalid(EXPECTED, input))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(EXPECTED, input))
    }
}

/// A whole number greater than zero
pub fn parse_positive_int(input: &str) -> Result<u32> {
    const EXPECTED: &str = "a positive whole number";

    match input.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(invalid(EXPECTED, input)),
    }
}

/// A single character, `M` or `F`, either case
pub fn parse_gender(input: &str) -> Result<Gender> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some('m' | 'M'), None) => Ok(Gender::Male),
        (Some('f' | 'F'), None) => Ok(Gender::Female),
        _ => Err(invalid("M or F", input)),
    }
}

/// `y`/`yes` or `n`/`no`, either case
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(invalid("y or n", input)),
    }
}
