//! Line input for the interactive session
//!
//! `InputHandler` wraps rustyline for terminal use. `ScriptedInput` replays
//! a fixed list of lines, for tests and scripted runs.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;

use crate::errors::BodyMetricsError;

/// Source of user input lines
pub trait LineReader {
    /// Show `prompt` and read one line.
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input (trimmed)
    /// - Ok(None) when input has ended (EOF or Ctrl-C)
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input handler backed by rustyline
///
/// Keeps in-memory history for line editing within one run of the program;
/// nothing is written to disk.
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(InputHandler { editor })
    }
}

impl LineReader for InputHandler {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => {
                log::debug!("Input interrupted (Ctrl-C)");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                log::debug!("End of input");
                Ok(None)
            }
            Err(err) => Err(BodyMetricsError::from(err).into()),
        }
    }
}

/// Replays a fixed sequence of lines, then reports end of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().map(|line| line.trim().to_string()))
    }
}
