//! bodymetrics - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use bodymetrics::cli::{Args, AssessArgs, Commands, Config, Verbosity};
use bodymetrics::metrics::Assessment;
use bodymetrics::repl::display::format_report;
use bodymetrics::repl::{ReplConfig, ReplSession};

fn main() -> Result<()> {
    let args = Args::parse();

    // Flags are known before the config file is read; its default applies after
    init_logging(args.verbosity(Verbosity::Normal));

    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;

    if args.flag_verbosity().is_none() {
        set_verbosity(config.default_verbosity());
    }

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    match &args.command {
        None | Some(Commands::Start) => run_interactive(&config),
        Some(Commands::Assess(assess)) => run_assess(assess, &config),
        Some(Commands::Config) => show_config(&args, &config),
    }
}

/// Initialize logging; RUST_LOG takes precedence over the verbosity flags
fn init_logging(verbosity: Verbosity) {
    env_logger::Builder::new()
        .filter_level(Verbosity::VeryVerbose.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    set_verbosity(verbosity);
}

/// Cap the log level at `verbosity`, unless RUST_LOG set the filter
fn set_verbosity(verbosity: Verbosity) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    log::set_max_level(verbosity.level_filter());
    log::debug!("Log verbosity: {}", verbosity.as_str());
}

/// Run the interactive prompt loop
fn run_interactive(config: &Config) -> Result<()> {
    log::info!("Starting interactive session");

    let mut repl = ReplSession::interactive(ReplConfig::from(config))?;
    repl.run()?;

    log::info!(
        "Session finished after {} assessment(s)",
        repl.session().run_count()
    );
    Ok(())
}

/// Assess one set of measurements given on the command line
fn run_assess(assess: &AssessArgs, config: &Config) -> Result<()> {
    let subject = assess.to_subject()?;
    log::debug!("Assessing {:?}", subject);

    let assessment = Assessment::of(&subject);

    if assess.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!(
            "{}",
            format_report(&assessment, config.display.decimal_places)
        );
    }

    Ok(())
}

/// Print the effective configuration
fn show_config(args: &Args, config: &Config) -> Result<()> {
    let source = match (&args.config, Config::default_path()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    };

    println!("{} {}", "Configuration:".bold().cyan(), source.dimmed());
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
