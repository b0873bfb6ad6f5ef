//! Command-line argument parsing for bodymetrics
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::errors::Result;
use crate::metrics::{Gender, Subject};

/// bodymetrics - BMI, body fat and diet guidance from tape-measure numbers
#[derive(Parser, Debug)]
#[command(name = "bodymetrics")]
#[command(version)]
#[command(about = "Compute BMI and U.S. Navy body fat with diet guidance", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand (interactive session when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session
    Start,

    /// Assess a single set of measurements and exit
    Assess(AssessArgs),

    /// Display current configuration
    Config,
}

/// Measurements for one-shot mode
#[derive(ClapArgs, Debug, Clone)]
pub struct AssessArgs {
    /// Height in centimeters
    #[arg(long)]
    pub height: f64,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,

    /// Waist circumference in centimeters
    #[arg(long)]
    pub waist: f64,

    /// Neck circumference in centimeters
    #[arg(long)]
    pub neck: f64,

    /// Gender: m or f
    #[arg(long)]
    pub gender: Gender,

    /// Hip circumference in centimeters (female only)
    #[arg(long)]
    pub hip: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AssessArgs {
    /// Validate the flags into a subject
    pub fn to_subject(&self) -> Result<Subject> {
        let subject = Subject::new(
            self.height,
            self.weight,
            self.waist,
            self.neck,
            self.gender,
            self.hip,
            self.age,
        )?;
        subject.check_formula_domain()?;
        Ok(subject)
    }
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Verbosity chosen with `-q` or `-v`, if any
    pub fn flag_verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else {
            match self.verbose {
                0 => None,
                1 => Some(Verbosity::Verbose),
                _ => Some(Verbosity::VeryVerbose),
            }
        }
    }

    /// Verbosity from flags, or `fallback` when none were given
    pub fn verbosity(&self, fallback: Verbosity) -> Verbosity {
        self.flag_verbosity().unwrap_or(fallback)
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Log level for this verbosity
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::VeryVerbose => LevelFilter::Debug,
        }
    }
}
