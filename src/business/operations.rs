//! Database-level operations behind the shell actions
//!
//! Each operation opens its own connection and drops it before returning.

use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::crypto::hash_password;
use crate::database::{Database, TableCounts, queries};
use crate::error::{ToolError, Result};
use crate::utils::with_db_extension;
use crate::{
    DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_COMPANY_EMPTY,
    DEFAULT_COMPANY_POPULATED,
};

/// Rows seeded into a freshly created database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefaults {
    /// Company inserted when the companies table is empty
    pub company_name: String,
    /// Admin account inserted unless the username already exists
    pub admin_username: String,
    /// Plaintext admin password, hashed before storage
    pub admin_password: String,
}

impl SeedDefaults {
    /// Defaults used by populate-new ("unbekannt")
    pub fn populated() -> Self {
        Self::with_company_name(DEFAULT_COMPANY_POPULATED)
    }

    /// Defaults used by create-empty ("Unknown")
    pub fn empty() -> Self {
        Self::with_company_name(DEFAULT_COMPANY_EMPTY)
    }

    /// Standard admin account with a custom default company
    pub fn with_company_name(name: &str) -> Self {
        Self {
            company_name: name.to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.company_name.is_empty() {
            return Err(ToolError::InvalidInput("default company name is empty".to_string()));
        }
        if self.admin_username.is_empty() || self.admin_password.is_empty() {
            return Err(ToolError::InvalidInput("admin credentials are empty".to_string()));
        }
        Ok(())
    }
}

/// Seed the default company and admin rows into an open database
///
/// Safe to run again on the same file: the company is only inserted while
/// the companies table is empty and the admin insert ignores an existing
/// username. Both inserts commit together or not at all.
pub fn initialize(db: &Database, defaults: &SeedDefaults) -> Result<()> {
    defaults.validate()?;

    db.begin_transaction()?;

    let result = (|| -> Result<()> {
        let conn = db.connection()?;

        if queries::count_companies(conn)? == 0 {
            queries::insert_company(conn, &defaults.company_name)?;
            debug!("seeded default company {:?}", defaults.company_name);
        }

        let hashed = hash_password(&defaults.admin_password);
        if queries::insert_user_if_missing(conn, &defaults.admin_username, &hashed)? {
            debug!("seeded user {:?}", defaults.admin_username);
        }

        Ok(())
    })();

    match result {
        Ok(()) => db.commit_transaction(),
        Err(e) => {
            db.rollback_transaction()?;
            Err(e)
        }
    }
}

/// Create a database, seed its defaults and return the final path
fn create_database(path: &Path, defaults: &SeedDefaults) -> Result<PathBuf> {
    let path = with_db_extension(path);
    let db = Database::create(&path)?;
    initialize(&db, defaults)?;
    Ok(path)
}

/// Create a database that the interactive seeder fills afterwards
pub fn populate_new(path: &Path, defaults: &SeedDefaults) -> Result<PathBuf> {
    let path = create_database(path, defaults)?;
    info!("Database created at {}", path.display());
    Ok(path)
}

/// Create a database holding only the default rows
pub fn create_empty(path: &Path, defaults: &SeedDefaults) -> Result<PathBuf> {
    let path = create_database(path, defaults)?;
    info!("Empty database created at {}", path.display());
    Ok(path)
}

/// Delete all rows from an existing database, keeping the tables
///
/// Returns the row counts that were removed.
pub fn clear_existing(path: &Path) -> Result<TableCounts> {
    let db = Database::open(path)?;
    db.begin_transaction()?;

    let result = (|| -> Result<TableCounts> {
        let conn = db.connection()?;
        let counts = queries::get_table_counts(conn)?;
        queries::delete_all_rows(conn)?;
        Ok(counts)
    })();

    match result {
        Ok(counts) => {
            db.commit_transaction()?;
            info!("Database cleared at {} ({} rows removed)", path.display(), counts.total());
            Ok(counts)
        }
        Err(e) => {
            db.rollback_transaction()?;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256_hex;
    use tempfile::TempDir;

    #[test]
    fn test_populate_new_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = populate_new(&temp_dir.path().join("otp.db"), &SeedDefaults::populated()).unwrap();

        let db = Database::open(&path).unwrap();
        let conn = db.connection().unwrap();
        assert_eq!(queries::get_company_names(conn).unwrap(), vec!["unbekannt"]);
        assert_eq!(queries::count_users(conn).unwrap(), 1);
        assert_eq!(
            queries::get_password_hash(conn, "admin").unwrap(),
            Some(sha256_hex("1234"))
        );
    }

    #[test]
    fn test_create_empty_uses_unknown_company() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_empty(&temp_dir.path().join("otp.db"), &SeedDefaults::empty()).unwrap();

        let db = Database::open(&path).unwrap();
        let conn = db.connection().unwrap();
        assert_eq!(queries::get_company_names(conn).unwrap(), vec!["Unknown"]);
    }

    #[test]
    fn test_extension_appended() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_empty(&temp_dir.path().join("secrets"), &SeedDefaults::empty()).unwrap();
        assert_eq!(path, temp_dir.path().join("secrets.db"));
        assert!(path.exists());
        assert!(!temp_dir.path().join("secrets").exists());
    }

    #[test]
    fn test_creating_twice_keeps_one_default_row_each() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("otp.db");
        populate_new(&target, &SeedDefaults::populated()).unwrap();
        create_empty(&target, &SeedDefaults::empty()).unwrap();

        let db = Database::open(&target).unwrap();
        let counts = queries::get_table_counts(db.connection().unwrap()).unwrap();
        assert_eq!(counts.companies, 1);
        assert_eq!(counts.users, 1);
    }

    #[test]
    fn test_empty_company_name_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = create_empty(&temp_dir.path().join("otp.db"), &SeedDefaults::with_company_name(""));
        assert!(matches!(result, Err(ToolError::InvalidInput(_))));
    }

    #[test]
    fn test_clear_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = populate_new(&temp_dir.path().join("otp.db"), &SeedDefaults::populated()).unwrap();

        let removed = clear_existing(&path).unwrap();
        assert_eq!(removed, TableCounts { companies: 1, users: 1, otp_secrets: 0 });

        let db = Database::open(&path).unwrap();
        let conn = db.connection().unwrap();
        assert!(queries::get_table_counts(conn).unwrap().is_empty());
        for table in ["companies", "users", "otp_secrets"] {
            assert!(queries::table_exists(conn, table).unwrap());
        }
    }

    #[test]
    fn test_clear_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.db");
        assert!(matches!(clear_existing(&path), Err(ToolError::DatabaseNotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_database_without_tables_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("other.db");
        rusqlite::Connection::open(&path).unwrap()
            .execute_batch("CREATE TABLE unrelated (id INTEGER)")
            .unwrap();

        assert!(matches!(clear_existing(&path), Err(ToolError::DatabaseError(_))));
    }
}
