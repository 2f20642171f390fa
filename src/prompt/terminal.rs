//! Line-based prompter over any reader/writer pair

use std::io::{BufRead, Write};
use std::path::PathBuf;
use log::trace;
use crate::error::Result;
use crate::utils::trim_line_ending;
use super::{Prompter, CANCEL_INPUT};

/// Answers accepted as "yes" by `confirm`
const YES_ANSWERS: &[&str] = &["y", "yes", "j", "ja"];

/// Prompter reading lines from `R` and writing prompts to `W`
///
/// End of input cancels whatever prompt is open.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Get the writer (tests inspect what was printed)
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the prompter and return the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt} ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            trace!("input closed at prompt {prompt:?}");
            return Ok(None);
        }
        Ok(Some(trim_line_ending(&line).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn save_path(&mut self, title: &str, suggested: &str) -> Result<Option<PathBuf>> {
        let prompt = format!("{title} [{suggested}, '{CANCEL_INPUT}' to cancel]:");
        Ok(match self.ask(&prompt)? {
            None => None,
            Some(input) if input.trim() == CANCEL_INPUT => None,
            Some(input) if input.trim().is_empty() => Some(PathBuf::from(suggested)),
            Some(input) => Some(PathBuf::from(input.trim())),
        })
    }

    fn open_path(&mut self, title: &str) -> Result<Option<PathBuf>> {
        let prompt = format!("{title}:");
        Ok(match self.ask(&prompt)? {
            Some(input) if !input.trim().is_empty() && input.trim() != CANCEL_INPUT => {
                Some(PathBuf::from(input.trim()))
            }
            _ => None,
        })
    }

    fn confirm(&mut self, title: &str, question: &str) -> Result<bool> {
        let prompt = format!("{title}: {question} [y/N]");
        Ok(match self.ask(&prompt)? {
            Some(answer) => {
                let answer = answer.trim().to_lowercase();
                YES_ANSWERS.contains(&answer.as_str())
            }
            None => false,
        })
    }

    fn text(&mut self, title: &str, label: &str) -> Result<Option<String>> {
        writeln!(self.writer, "-- {title} --")?;
        self.ask(label)
    }

    fn secret(&mut self, title: &str, label: &str) -> Result<Option<String>> {
        // No echo control on a plain stream; the value is never printed back.
        writeln!(self.writer, "-- {title} --")?;
        self.ask(label)
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn menu(&mut self, frame: &str) -> Result<Option<String>> {
        writeln!(self.writer, "{frame}")?;
        self.ask(">")
    }
}
