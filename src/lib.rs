//! # otpdb
//!
//! Creates, seeds and clears the SQLite database used by the TOTP Manager.
//!
//! ## Features
//!
//! - Schema creation for companies, users and OTP secrets
//! - Default company and admin rows seeded on creation
//! - Interactive seeding of companies and users
//! - Clearing all rows while keeping the tables
//! - Terminal shell with English and German UI text
//!
//! ## Example
//!
//! ```no_run
//! use otpdb::business::operations;
//! use std::path::Path;
//!
//! let path = operations::create_empty(Path::new("/tmp/otp"), &otpdb::SeedDefaults::empty()).unwrap();
//! assert!(path.ends_with("otp.db"));
//! ```

pub mod crypto;
pub mod database;
pub mod business;
pub mod localization;
pub mod prompt;
pub mod shell;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{ToolError, Result};
pub use database::models::{Company, User, OtpSecret, TableCounts};
pub use database::Database;
pub use business::{Seeder, SeedDefaults, SeedReport};
pub use localization::Translations;
pub use prompt::{Prompter, TerminalPrompter};
pub use shell::{Action, Outcome, Shell};

/// Suggested file name for a new database
pub const DEFAULT_DB_FILENAME: &str = "otp.db";

/// Extension enforced on created databases
pub const DB_EXTENSION: &str = "db";

/// Username of the seeded admin account
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Password of the seeded admin account (stored hashed)
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

/// Default company seeded by populate-new
pub const DEFAULT_COMPANY_POPULATED: &str = "unbekannt";

/// Default company seeded by create-empty
pub const DEFAULT_COMPANY_EMPTY: &str = "Unknown";

/// Entries shown per line when listing existing rows
pub const DISPLAY_ITEMS_PER_LINE: usize = 3;
