//! CLI module for bodymetrics
//!
//! Handles command-line argument parsing and configuration management.

pub mod args;
pub mod config;

pub use args::{Args, AssessArgs, Commands, Verbosity};
pub use config::Config;
