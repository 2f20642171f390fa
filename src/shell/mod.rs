//! Interactive shell
//!
//! The window of the tool: a title bar with a close control, a status line,
//! and one button per action. Everything it asks the operator goes through
//! a `Prompter`.

pub mod about;

use std::path::PathBuf;
use log::{error, info};
use crate::business::operations;
use crate::business::{Seeder, SeedDefaults};
use crate::database::{Database, TableCounts};
use crate::error::Result;
use crate::localization::Translations;
use crate::prompt::Prompter;
use crate::DEFAULT_DB_FILENAME;

/// Something the operator can trigger from the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create a database with defaults, then run the seeder
    PopulateNew,
    /// Create a database with defaults only
    CreateEmpty,
    /// Delete all rows from an existing database
    Clear,
    /// Show the about panel
    About,
    /// Close the shell
    Close,
}

impl Action {
    /// Actions shown as numbered buttons, in display order
    pub const BUTTONS: [Action; 4] = [
        Action::PopulateNew,
        Action::CreateEmpty,
        Action::Clear,
        Action::About,
    ];

    /// Translation key of the button label
    pub fn label_key(&self) -> &'static str {
        match self {
            Action::PopulateNew => "button_create",
            Action::CreateEmpty => "button_create_empty",
            Action::Clear => "button_clear",
            Action::About => "button_about",
            Action::Close => "close",
        }
    }

    /// Parse a menu selection: a button number or the close control
    pub fn parse(input: &str) -> Option<Action> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("x") || input.eq_ignore_ascii_case("q") {
            return Some(Action::Close);
        }
        let index: usize = input.parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::BUTTONS.get(i).copied())
    }
}

/// Result of dispatching one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A database was created at the path
    Created(PathBuf),
    /// A database was cleared; counts are the removed rows
    Cleared(PathBuf, TableCounts),
    /// The about panel was shown
    Shown,
    /// The operator cancelled the file selection; nothing was touched
    Cancelled,
    /// The operation failed; details went to the log
    Failed,
    /// The shell was closed
    Closed,
}

/// Shell state: status line, defaults and the prompter it drives
pub struct Shell<P: Prompter> {
    prompter: P,
    tr: Translations,
    status: String,
    running: bool,
    populated: SeedDefaults,
    empty: SeedDefaults,
}

impl<P: Prompter> Shell<P> {
    pub fn new(prompter: P, tr: Translations) -> Self {
        Self {
            prompter,
            status: tr.get("status_initial").to_string(),
            tr,
            running: true,
            populated: SeedDefaults::populated(),
            empty: SeedDefaults::empty(),
        }
    }

    /// Replace the seed defaults of populate-new and create-empty
    pub fn with_defaults(mut self, populated: SeedDefaults, empty: SeedDefaults) -> Self {
        self.populated = populated;
        self.empty = empty;
        self
    }

    /// Current status line
    pub fn status(&self) -> &str {
        &self.status
    }

    /// False once the close control was used
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Consume the shell and return its prompter
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Render the window as text
    pub fn render(&self) -> String {
        let title = self.tr.get("window_title");
        let close = self.tr.get("close_control");

        let mut lines = vec![
            self.status.clone(),
            format!("! {}", self.tr.get("naming_hint")),
            String::new(),
        ];
        for (i, action) in Action::BUTTONS.iter().enumerate() {
            lines.push(format!("  [{}] {}", i + 1, self.tr.get(action.label_key())));
        }

        let inner = lines.iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(title.chars().count() + close.chars().count() + 1))
            .max()
            .unwrap_or(0);
        let gap = inner - title.chars().count() - close.chars().count();
        let border = format!("+{}+", "-".repeat(inner + 2));

        let mut frame = vec![
            border.clone(),
            format!("| {title}{}{close} |", " ".repeat(gap)),
            border.clone(),
        ];
        frame.extend(lines.iter().map(|l| {
            format!("| {l}{} |", " ".repeat(inner - l.chars().count()))
        }));
        frame.push(border);
        frame.push(self.tr.get("choose_action").to_string());
        frame.join("\n")
    }

    /// Show the window and dispatch selections until closed or input ends
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            let frame = self.render();
            let Some(input) = self.prompter.menu(&frame)? else {
                break;
            };

            match Action::parse(&input) {
                Some(action) => {
                    self.dispatch(action)?;
                }
                None if input.trim().is_empty() => {}
                None => {
                    let msg = self.tr.format("invalid_choice", &[("choice", input.trim())]);
                    self.prompter.notify(&msg)?;
                }
            }
        }
        Ok(())
    }

    /// Run one action and update the status line
    ///
    /// Operation failures become `Outcome::Failed`; only prompter I/O
    /// errors are returned as `Err`.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::PopulateNew => self.populate_new(),
            Action::CreateEmpty => self.create_empty(),
            Action::Clear => self.clear(),
            Action::About => {
                let text = about::about_text(&self.tr);
                self.prompter.notify(&text)?;
                Ok(Outcome::Shown)
            }
            Action::Close => {
                info!("shell closed");
                self.running = false;
                Ok(Outcome::Closed)
            }
        }
    }

    fn populate_new(&mut self) -> Result<Outcome> {
        let title = self.tr.get("dialog_save_database").to_string();
        let Some(path) = self.prompter.save_path(&title, DEFAULT_DB_FILENAME)? else {
            return Ok(Outcome::Cancelled);
        };

        let path = match operations::populate_new(&path, &self.populated) {
            Ok(path) => path,
            Err(e) => {
                error!("creating {} failed: {e}", path.display());
                self.status = self.tr.get("status_create_failed").to_string();
                return Ok(Outcome::Failed);
            }
        };
        self.status = self.tr.format("status_created", &[("path", path.display().to_string().as_str())]);

        if let Err(e) = self.seed(&path) {
            error!("seeding {} failed: {e}", path.display());
            let msg = self.tr.format("seed_failed", &[("error", e.to_string().as_str())]);
            self.prompter.notify(&msg)?;
        }

        Ok(Outcome::Created(path))
    }

    fn seed(&mut self, path: &std::path::Path) -> Result<()> {
        let db = Database::open(path)?;
        Seeder::new(&db, &mut self.prompter, &self.tr).run()?;
        Ok(())
    }

    fn create_empty(&mut self) -> Result<Outcome> {
        let title = self.tr.get("dialog_save_empty").to_string();
        let Some(path) = self.prompter.save_path(&title, DEFAULT_DB_FILENAME)? else {
            return Ok(Outcome::Cancelled);
        };

        match operations::create_empty(&path, &self.empty) {
            Ok(path) => {
                self.status = self.tr.format("status_empty_created", &[("path", path.display().to_string().as_str())]);
                Ok(Outcome::Created(path))
            }
            Err(e) => {
                error!("creating {} failed: {e}", path.display());
                self.status = self.tr.get("status_create_failed").to_string();
                Ok(Outcome::Failed)
            }
        }
    }

    fn clear(&mut self) -> Result<Outcome> {
        let title = self.tr.get("dialog_open_database").to_string();
        let Some(path) = self.prompter.open_path(&title)? else {
            return Ok(Outcome::Cancelled);
        };

        match operations::clear_existing(&path) {
            Ok(counts) => {
                self.status = self.tr.format("status_cleared", &[("path", path.display().to_string().as_str())]);
                Ok(Outcome::Cleared(path, counts))
            }
            Err(e) => {
                error!("clearing {} failed: {e}", path.display());
                self.status = self.tr.get("status_clear_failed").to_string();
                Ok(Outcome::Failed)
            }
        }
    }
}
