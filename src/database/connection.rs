//! Database connection management

use std::path::{Path, PathBuf};
use log::debug;
use rusqlite::{Connection, OpenFlags};
use crate::error::{ToolError, Result};
use super::schema;

/// Database connection wrapper
pub struct Database {
    /// Path to the database file
    path: PathBuf,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open an existing database at the specified path
    ///
    /// Never creates the file; a missing path is `DatabaseNotFound`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolError::DatabaseNotFound(
                path.to_string_lossy().to_string()
            ));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("opened database {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            conn: Some(conn),
        })
    }

    /// Create (or reopen) a database and make sure all tables exist
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }
        debug!("schema ready in {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            conn: Some(conn),
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            ToolError::DatabaseError("Database not open".to_string())
        })
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Begin a transaction
    pub fn begin_transaction(&self) -> Result<()> {
        self.connection()?.execute_batch("BEGIN TRANSACTION")?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit_transaction(&self) -> Result<()> {
        self.connection()?.execute_batch("COMMIT")?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback_transaction(&self) -> Result<()> {
        self.connection()?.execute_batch("ROLLBACK")?;
        Ok(())
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}
