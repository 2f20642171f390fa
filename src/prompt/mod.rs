//! Operator interaction
//!
//! `Prompter` is everything the tool needs from the person driving it:
//! file selection, yes/no questions, free text and short notices. The shell
//! and the seeder only talk to this trait.

mod terminal;

pub use terminal::TerminalPrompter;

use std::path::PathBuf;
use crate::error::Result;

/// Input typed on a path prompt to cancel it
pub const CANCEL_INPUT: &str = "-";

/// Source of operator decisions and input
pub trait Prompter {
    /// Ask where to save a new database
    ///
    /// Returns `None` if the operator cancels.
    fn save_path(&mut self, title: &str, suggested: &str) -> Result<Option<PathBuf>>;

    /// Ask for an existing database to open
    fn open_path(&mut self, title: &str) -> Result<Option<PathBuf>>;

    /// Yes/no question, anything but an explicit yes is no
    fn confirm(&mut self, title: &str, question: &str) -> Result<bool>;

    /// Free text input, `None` if cancelled
    fn text(&mut self, title: &str, label: &str) -> Result<Option<String>>;

    /// Free text input that should not be shown back to the operator
    fn secret(&mut self, title: &str, label: &str) -> Result<Option<String>>;

    /// Show a message that needs no answer
    fn notify(&mut self, message: &str) -> Result<()>;

    /// Show the shell frame and read the raw selection, `None` when input ends
    fn menu(&mut self, frame: &str) -> Result<Option<String>>;
}
