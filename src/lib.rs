//! bodymetrics - BMI and body fat calculator
//!
//! Computes Body Mass Index and U.S. Navy body fat percentage from metric
//! measurements, classifies both, and suggests a diet plan.
//!
//! # Architecture
//!
//! - **metrics**: pure calculators and lookup tables
//! - **repl**: interactive prompt loop
//! - **cli**: argument parsing and configuration

pub mod errors;
pub mod metrics;
pub mod repl;
pub mod cli;

// Re-export commonly used types
pub use errors::{BodyMetricsError, Result};
pub use metrics::{Assessment, Gender, Subject};
