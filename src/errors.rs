//! Error types for bodymetrics
//!
//! The calculators themselves never fail; every variant here is raised at
//! the boundary (subject construction, console input, configuration).

use thiserror::Error;

/// Main error type for the bodymetrics tool
#[derive(Error, Debug)]
pub enum BodyMetricsError {
    /// A measurement is non-positive or not a finite number
    #[error("Invalid measurement: {field} must be a positive number, got {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },

    /// Measurements are individually valid but outside a formula's domain
    #[error("Invalid measurement: {0}")]
    FormulaDomain(String),

    /// Hip circumference supplied for a male subject
    #[error("Hip circumference only applies to female subjects")]
    InvalidHip,

    /// Malformed console or command-line input
    #[error("Invalid input '{input}': expected {expected}")]
    InvalidInput { expected: String, input: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Line editor errors
    #[error("Readline error: {0}")]
    ReadlineError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for bodymetrics operations
pub type Result<T> = std::result::Result<T, BodyMetricsError>;

/// Convert anyhow errors to BodyMetricsError
impl From<anyhow::Error> for BodyMetricsError {
    fn from(err: anyhow::Error) -> Self {
        BodyMetricsError::Generic(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for BodyMetricsError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        BodyMetricsError::ReadlineError(err.to_string())
    }
}
