//! Display manager for the interactive session
//!
//! Formatting lives in pure functions (`format_report`, `format_history`) so
//! it can be checked without a terminal; `DisplayManager` adds color and
//! prints.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::metrics::Assessment;
use crate::repl::session::RunRecord;

/// Render an assessment as plain text
pub fn format_report(assessment: &Assessment, decimals: usize) -> String {
    format!(
        "Your BMI is: {bmi:.prec$}\n\
         BMI Category: {bmi_category}\n\
         Body Fat Percentage: {body_fat:.prec$}%\n\
         Body Fat Category: {body_fat_category}\n\
         Diet Recommendation: {diet}\n",
        bmi = assessment.bmi,
        bmi_category = assessment.bmi_category,
        body_fat = assessment.body_fat_percentage,
        body_fat_category = assessment.body_fat_category,
        diet = assessment.diet_recommendation,
        prec = decimals,
    )
}

/// Render history records, one line each
pub fn format_history(records: &[&RunRecord], decimals: usize) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "{}. {} | BMI {:.prec$} ({}) | Body fat {:.prec$}% ({})\n",
                record.run,
                record.gender,
                record.bmi,
                record.bmi_category,
                record.body_fat_percentage,
                record.body_fat_category,
                prec = decimals,
            )
        })
        .collect()
}

/// Display manager for session UI
pub struct DisplayManager {
    decimals: usize,
}

impl DisplayManager {
    pub fn new(decimals: usize) -> Self {
        DisplayManager { decimals }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let rule = "=".repeat(width);
        let title = format!("  bodymetrics {} - BMI & Body Fat Calculator", version);

        println!("\n{}", rule.cyan());
        println!("{}", title.bold().cyan());
        println!("{}", "  Metric units: centimeters and kilograms".dimmed());
        println!("{}\n", rule.cyan());
        println!(
            "Answer each prompt (or type {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Display assessment results
    pub fn show_report(&self, assessment: &Assessment) {
        self.show_section("Results");
        print!("{}", format_report(assessment, self.decimals));
        println!();
    }

    /// Display in-memory run history
    pub fn show_history(&self, records: &[&RunRecord]) {
        if records.is_empty() {
            self.show_info("No assessments yet in this session.");
            return;
        }
        self.show_section("History");
        print!("{}", format_history(records, self.decimals));
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Show closing line with the number of runs
    pub fn show_goodbye(&self, runs: usize) {
        let noun = if runs == 1 { "assessment" } else { "assessments" };
        println!("{} ({} {} this session)", "Goodbye!".green(), runs, noun);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        stdout.flush()
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(2)
    }
}
