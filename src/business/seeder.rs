//! Interactive seeding of companies and users
//!
//! Runs after populate-new. Every accepted entry is inserted immediately, so
//! stopping halfway keeps whatever was entered so far.

use log::{debug, info, warn};
use crate::crypto::hash_password;
use crate::database::{Database, queries};
use crate::error::{ToolError, Result};
use crate::localization::Translations;
use crate::prompt::Prompter;
use crate::utils::format_list_for_display;
use crate::DISPLAY_ITEMS_PER_LINE;

/// Rows inserted by one seeding session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Company names added, in order
    pub companies: Vec<String>,
    /// Usernames added, in order
    pub users: Vec<String>,
}

impl SeedReport {
    /// True if nothing was inserted
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty() && self.users.is_empty()
    }
}

/// Prompt-driven seeder over an open database
pub struct Seeder<'a> {
    db: &'a Database,
    prompter: &'a mut dyn Prompter,
    tr: &'a Translations,
}

impl<'a> Seeder<'a> {
    pub fn new(db: &'a Database, prompter: &'a mut dyn Prompter, tr: &'a Translations) -> Self {
        Self { db, prompter, tr }
    }

    /// Ask for companies, then for users
    pub fn run(mut self) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        if self.prompter.confirm(
            self.tr.get("seed_companies_title"),
            self.tr.get("seed_companies_question"),
        )? {
            self.add_companies(&mut report)?;
        }

        if self.prompter.confirm(
            self.tr.get("seed_users_title"),
            self.tr.get("seed_users_question"),
        )? {
            self.add_users(&mut report)?;
        }

        info!(
            "seeding added {} companies and {} users to {}",
            report.companies.len(),
            report.users.len(),
            self.db.path().display()
        );
        Ok(report)
    }

    fn add_companies(&mut self, report: &mut SeedReport) -> Result<()> {
        let db = self.db;
        let conn = db.connection()?;

        loop {
            let existing = format_list_for_display(
                &queries::get_company_names(conn)?,
                DISPLAY_ITEMS_PER_LINE,
            );
            let label = format!(
                "{}\n{}\n{}",
                self.tr.get("existing_companies"),
                existing,
                self.tr.get("enter_company")
            );

            let Some(name) = self.prompter.text(self.tr.get("input_title"), &label)? else {
                break;
            };
            if name.is_empty() {
                break;
            }

            match queries::insert_company(conn, &name) {
                Ok(_) => {
                    debug!("added company {name:?}");
                    report.companies.push(name);
                }
                Err(ToolError::Duplicate(_)) => {
                    warn!("company {name:?} already exists");
                    let msg = self.tr.format("duplicate_company", &[("name", name.as_str())]);
                    self.prompter.notify(&msg)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    fn add_users(&mut self, report: &mut SeedReport) -> Result<()> {
        let db = self.db;
        let conn = db.connection()?;

        loop {
            let existing = format_list_for_display(
                &queries::get_usernames(conn)?,
                DISPLAY_ITEMS_PER_LINE,
            );
            let label = format!(
                "{}\n{}\n{}",
                self.tr.get("existing_users"),
                existing,
                self.tr.get("enter_username")
            );

            let Some(username) = self.prompter.text(self.tr.get("input_title"), &label)? else {
                break;
            };
            if username.is_empty() {
                break;
            }

            // A cancelled password ends the user loop; the username is dropped.
            let password = self.prompter.secret(
                self.tr.get("input_title"),
                self.tr.get("enter_password"),
            )?;
            let Some(password) = password.filter(|p| !p.is_empty()) else {
                debug!("password prompt cancelled for {username:?}");
                break;
            };

            match queries::insert_user(conn, &username, &hash_password(&password)) {
                Ok(_) => {
                    debug!("added user {username:?}");
                    report.users.push(username);
                }
                Err(ToolError::Duplicate(_)) => {
                    warn!("user {username:?} already exists");
                    let msg = self.tr.format("duplicate_user", &[("name", username.as_str())]);
                    self.prompter.notify(&msg)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::operations::{populate_new, SeedDefaults};
    use crate::crypto::sha256_hex;
    use crate::prompt::TerminalPrompter;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn seeded_db(temp_dir: &TempDir) -> Database {
        let path = populate_new(&temp_dir.path().join("otp.db"), &SeedDefaults::populated()).unwrap();
        Database::open(&path).unwrap()
    }

    fn run_with_input(db: &Database, input: &str) -> (Result<SeedReport>, String) {
        let tr = Translations::new().unwrap();
        let mut prompter = TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = Seeder::new(db, &mut prompter, &tr).run();
        (result, String::from_utf8(prompter.into_writer()).unwrap())
    }

    #[test]
    fn test_decline_both() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        let (report, _) = run_with_input(&db, "n\nn\n");
        assert!(report.unwrap().is_empty());
        assert_eq!(queries::count_companies(db.connection().unwrap()).unwrap(), 1);
    }

    #[test]
    fn test_add_companies_until_empty_input() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        let (report, out) = run_with_input(&db, "y\nAcme\nGlobex\n\nn\n");
        let report = report.unwrap();
        assert_eq!(report.companies, vec!["Acme", "Globex"]);
        assert_eq!(
            queries::get_company_names(db.connection().unwrap()).unwrap(),
            vec!["unbekannt", "Acme", "Globex"]
        );
        // second prompt lists what the first one added
        assert!(out.contains("Existing companies:\nunbekannt, Acme\nEnter the company name:"));
    }

    #[test]
    fn test_existing_list_wraps_after_three() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        let (_, out) = run_with_input(&db, "y\nA\nB\nC\n\nn\n");
        assert!(out.contains("unbekannt, A, B\nC\nEnter the company name:"));
    }

    #[test]
    fn test_duplicate_company_reported_and_loop_continues() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        let (report, out) = run_with_input(&db, "y\nunbekannt\nAcme\n\nn\n");
        assert_eq!(report.unwrap().companies, vec!["Acme"]);
        assert!(out.contains("Company \"unbekannt\" already exists."));
        assert_eq!(queries::count_companies(db.connection().unwrap()).unwrap(), 2);
    }

    #[test]
    fn test_add_user_hashes_password() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        let (report, out) = run_with_input(&db, "n\ny\nalice\nsecret1\n\n");
        assert_eq!(report.unwrap().users, vec!["alice"]);
        assert!(!out.contains("secret1"));
        assert_eq!(
            queries::get_password_hash(db.connection().unwrap(), "alice").unwrap(),
            Some(sha256_hex("secret1"))
        );
    }

    #[test]
    fn test_cancelled_password_stops_user_loop() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        // empty password ends the loop, "carol" is never asked for
        let (report, _) = run_with_input(&db, "n\ny\nbob\n\ncarol\npw\n");
        assert!(report.unwrap().users.is_empty());
        assert_eq!(queries::get_usernames(db.connection().unwrap()).unwrap(), vec!["admin"]);
    }

    #[test]
    fn test_duplicate_user_reported() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        let (report, out) = run_with_input(&db, "n\ny\nadmin\nx\n\n");
        assert!(report.unwrap().users.is_empty());
        assert!(out.contains("User \"admin\" already exists."));
        assert_eq!(
            queries::get_password_hash(db.connection().unwrap(), "admin").unwrap(),
            Some(sha256_hex("1234"))
        );
    }

    #[test]
    fn test_input_ends_mid_session() {
        let temp_dir = TempDir::new().unwrap();
        let db = seeded_db(&temp_dir);

        let (report, _) = run_with_input(&db, "y\nAcme\n");
        assert_eq!(report.unwrap().companies, vec!["Acme"]);
    }
}
