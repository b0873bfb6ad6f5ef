//! Command handler for session built-in commands
//!
//! Commands start with `/` and are accepted at any prompt.

use anyhow::Result;
use colored::*;

use crate::repl::display::DisplayManager;
use crate::repl::session::SessionManager;

/// Number of runs `/history` lists without an explicit limit
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Session command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    History { limit: Option<usize> },
    Clear,
    Exit,
    Unknown { input: String },
}

/// Check whether an input line is a command rather than a value
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Command handler for parsing and executing commands
#[derive(Debug, Default)]
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Unknown { input: input.to_string() };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown { input: input.to_string() };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "history" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok());
                Command::History { limit }
            }
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the session should continue, false if it should exit
    pub fn execute(
        &self,
        command: Command,
        session: &SessionManager,
        display: &DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Exit => Ok(false),
            Command::History { limit } => {
                let records = session.get_history(limit.unwrap_or(DEFAULT_HISTORY_LIMIT));
                display.show_history(&records);
                Ok(true)
            }
            Command::Clear => {
                display.clear_screen()?;
                Ok(true)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(true)
            }
        }
    }

    fn show_help(&self) {
        println!("\n{}", "Available commands:".bold().cyan());
        println!("  {}         Show this help", "/help".green());
        println!(
            "  {}  List assessments from this session (default {})",
            "/history [n]".green(),
            DEFAULT_HISTORY_LIMIT
        );
        println!("  {}        Clear the screen", "/clear".green());
        println!("  {}         Quit", "/exit".green());
        println!();
        println!("Measurements are in centimeters and kilograms. Gender is M or F.");
        println!();
    }
}
