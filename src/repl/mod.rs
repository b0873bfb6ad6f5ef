//! Interactive session
//!
//! Prompts for one subject's measurements, re-prompting until each answer
//! is valid, prints the assessment, then asks whether to go again. The
//! loop owns all mutable state; the metrics engine is called fresh on every
//! pass.

pub mod commands;
pub mod display;
pub mod input;
pub mod prompts;
pub mod session;

use anyhow::Result;

use crate::cli::Config;
use crate::errors::BodyMetricsError;
use crate::metrics::{Assessment, Gender, Subject};
use crate::repl::commands::{is_command, CommandHandler};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputHandler, LineReader, ScriptedInput};
use crate::repl::prompts::{parse_gender, parse_positive_int, parse_positive_real, parse_yes_no};
pub use crate::repl::session::{RunRecord, SessionManager};

/// Session loop settings
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Ask "Calculate again?" after each assessment
    pub prompt_retry: bool,
    pub show_banner: bool,
    pub decimal_places: usize,
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt_retry: true,
            show_banner: true,
            decimal_places: 2,
            max_history: session::DEFAULT_MAX_HISTORY,
        }
    }
}

impl From<&Config> for ReplConfig {
    fn from(config: &Config) -> Self {
        ReplConfig {
            prompt_retry: config.session.prompt_retry,
            show_banner: config.display.show_banner,
            decimal_places: config.display.decimal_places,
            max_history: config.session.max_history,
        }
    }
}

/// Session coordinator
///
/// Manages the interactive loop with:
/// - Input handling (any `LineReader`)
/// - Command processing
/// - Session state management
/// - Display coordination
pub struct ReplSession<R: LineReader> {
    reader: R,
    config: ReplConfig,
    command_handler: CommandHandler,
    session_manager: SessionManager,
    display_manager: DisplayManager,
}

impl ReplSession<InputHandler> {
    /// Session reading from the terminal
    pub fn interactive(config: ReplConfig) -> Result<Self> {
        Ok(Self::new(InputHandler::new()?, config))
    }
}

impl<R: LineReader> ReplSession<R> {
    pub fn new(reader: R, config: ReplConfig) -> Self {
        ReplSession {
            reader,
            command_handler: CommandHandler::new(),
            session_manager: SessionManager::with_capacity(config.max_history),
            display_manager: DisplayManager::new(config.decimal_places),
            config,
        }
    }

    /// Run assessments until the user declines to continue or input ends
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.display_manager.show_banner(env!("CARGO_PKG_VERSION"));
        }

        loop {
            let Some(subject) = self.collect_subject()? else {
                break;
            };

            let assessment = Assessment::of(&subject);
            self.display_manager.show_report(&assessment);
            let record = self.session_manager.record_run(&subject, &assessment);
            log::info!(
                "Run {}: BMI {:.2} ({}), body fat {:.2}% ({})",
                record.run,
                record.bmi,
                record.bmi_category,
                record.body_fat_percentage,
                record.body_fat_category
            );

            if !self.config.prompt_retry {
                break;
            }
            match self.ask("Calculate again? (y/n): ", parse_yes_no)? {
                Some(true) => continue,
                _ => break,
            }
        }

        self.display_manager
            .show_goodbye(self.session_manager.run_count());
        Ok(())
    }

    /// Prompt for every measurement and build a subject.
    ///
    /// Returns Ok(None) when the user exits or input ends. If the finished
    /// subject fails validation the whole set is asked for again.
    fn collect_subject(&mut self) -> Result<Option<Subject>> {
        loop {
            let Some(height) = self.ask("Enter height (cm): ", parse_positive_real)? else {
                return Ok(None);
            };
            let Some(weight) = self.ask("Enter weight (kg): ", parse_positive_real)? else {
                return Ok(None);
            };
            let Some(waist) = self.ask("Enter waist circumference (cm): ", parse_positive_real)?
            else {
                return Ok(None);
            };
            let Some(neck) = self.ask("Enter neck circumference (cm): ", parse_positive_real)?
            else {
                return Ok(None);
            };
            let Some(gender) = self.ask("Enter gender (M/F): ", parse_gender)? else {
                return Ok(None);
            };
            let hip = match gender {
                Gender::Female => {
                    match self.ask("Enter hip circumference (cm): ", parse_positive_real)? {
                        Some(hip) => Some(hip),
                        None => return Ok(None),
                    }
                }
                Gender::Male => None,
            };
            let Some(age) = self.ask("Enter age (years): ", parse_positive_int)? else {
                return Ok(None);
            };

            let subject = Subject::new(height, weight, waist, neck, gender, hip, age)
                .and_then(|subject| subject.check_formula_domain().map(|_| subject));

            match subject {
                Ok(subject) => return Ok(Some(subject)),
                Err(err) => {
                    log::debug!("Rejected measurements: {}", err);
                    self.display_manager.show_error(&err.to_string());
                    self.display_manager
                        .show_info("Please enter the measurements again.");
                }
            }
        }
    }

    /// Ask until `parse` accepts the answer.
    ///
    /// Commands are handled in place and the question is repeated. Returns
    /// Ok(None) on `/exit` or end of input.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> crate::errors::Result<T>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.reader.read_line(prompt)? else {
                return Ok(None);
            };

            if is_command(&line) {
                let command = self.command_handler.parse(&line);
                let keep_going = self.command_handler.execute(
                    command,
                    &self.session_manager,
                    &self.display_manager,
                )?;
                if !keep_going {
                    return Ok(None);
                }
                continue;
            }

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err @ BodyMetricsError::InvalidInput { .. }) => {
                    log::debug!("Invalid answer to '{}': {}", prompt.trim(), err);
                    self.display_manager.show_error(&err.to_string());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Get session manager (immutable)
    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }

    /// Get the input source
    pub fn reader(&self) -> &R {
        &self.reader
    }
}
