//! SQL query operations for database access
//!
//! This module provides low-level query functions for database operations.
//! For tool-level operations, use `business::operations`.

use rusqlite::{Connection, params};
use crate::error::Result;
use super::models::{Company, OtpSecret, TableCounts, User};
use super::schema::CLEAR_ORDER;

// ============================================================================
// Companies queries
// ============================================================================

/// Count rows in companies
pub fn count_companies(conn: &Connection) -> Result<u64> {
    count_rows(conn, "companies")
}

/// Insert a company, returning its row ID
pub fn insert_company(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute("INSERT INTO companies (name) VALUES (?)", params![name])?;
    Ok(conn.last_insert_rowid())
}

/// Get all company names in insertion order
pub fn get_company_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM companies ORDER BY id")?;
    let names = stmt.query_map([], |row| row.get(0))?;
    names.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get all companies
pub fn get_companies(conn: &Connection) -> Result<Vec<Company>> {
    let mut stmt = conn.prepare("SELECT id, name FROM companies ORDER BY id")?;

    let companies = stmt.query_map([], |row| {
        Ok(Company {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    companies.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

// ============================================================================
// Users queries
// ============================================================================

/// Count rows in users
pub fn count_users(conn: &Connection) -> Result<u64> {
    count_rows(conn, "users")
}

/// Insert a user with an already hashed password, returning its row ID
pub fn insert_user(conn: &Connection, username: &str, password_hash: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?, ?)",
        params![username, password_hash],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a user unless the username already exists
///
/// Returns true if a row was inserted.
pub fn insert_user_if_missing(conn: &Connection, username: &str, password_hash: &str) -> Result<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO users (username, password) VALUES (?, ?)",
        params![username, password_hash],
    )?;
    Ok(changed > 0)
}

/// Get all usernames in insertion order
pub fn get_usernames(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT username FROM users ORDER BY id")?;
    let names = stmt.query_map([], |row| row.get(0))?;
    names.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get all users
pub fn get_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, username, password FROM users ORDER BY id")?;

    let users = stmt.query_map([], |row| {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            password_hash: row.get(2)?,
        })
    })?;

    users.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get the stored password hash of a user
pub fn get_password_hash(conn: &Connection, username: &str) -> Result<Option<String>> {
    let result = conn.query_row(
        "SELECT password FROM users WHERE username = ?",
        params![username],
        |row| row.get(0),
    );

    match result {
        Ok(hash) => Ok(Some(hash)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// OTP secrets queries
// ============================================================================

/// Count rows in otp_secrets
pub fn count_otp_secrets(conn: &Connection) -> Result<u64> {
    count_rows(conn, "otp_secrets")
}

/// Get all OTP secrets
pub fn get_otp_secrets(conn: &Connection) -> Result<Vec<OtpSecret>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, secret, otp_type, refresh_time, company_id
         FROM otp_secrets ORDER BY id"
    )?;

    let secrets = stmt.query_map([], |row| {
        Ok(OtpSecret {
            id: row.get(0)?,
            name: row.get(1)?,
            secret: row.get(2)?,
            otp_type: row.get(3)?,
            refresh_time: row.get(4)?,
            company_id: row.get(5)?,
        })
    })?;

    secrets.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

// ============================================================================
// Whole-database queries
// ============================================================================

/// Get row counts of all three tables
pub fn get_table_counts(conn: &Connection) -> Result<TableCounts> {
    Ok(TableCounts {
        companies: count_companies(conn)?,
        users: count_users(conn)?,
        otp_secrets: count_otp_secrets(conn)?,
    })
}

/// Delete every row from every table, dependents first
///
/// Table definitions are left in place. The caller owns the transaction.
pub fn delete_all_rows(conn: &Connection) -> Result<()> {
    for table in CLEAR_ORDER {
        conn.execute(&format!("DELETE FROM {table}"), [])?;
    }
    Ok(())
}

/// Check whether a table exists
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

// `table` only ever comes from the fixed names above
fn count_rows(conn: &Connection, table: &str) -> Result<u64> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {table}"),
        [],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::CREATE_ALL_TABLES;
    use crate::error::ToolError;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        for sql in CREATE_ALL_TABLES {
            conn.execute(sql, []).unwrap();
        }
        conn
    }

    #[test]
    fn test_insert_and_list_companies() {
        let conn = setup_test_db();
        let first = insert_company(&conn, "Acme").unwrap();
        let second = insert_company(&conn, "Globex").unwrap();
        assert!(second > first);

        assert_eq!(get_company_names(&conn).unwrap(), vec!["Acme", "Globex"]);
        assert_eq!(count_companies(&conn).unwrap(), 2);

        let companies = get_companies(&conn).unwrap();
        assert_eq!(companies[0], Company { id: first, name: "Acme".to_string() });
    }

    #[test]
    fn test_duplicate_company() {
        let conn = setup_test_db();
        insert_company(&conn, "Acme").unwrap();
        let err = insert_company(&conn, "Acme").unwrap_err();
        assert!(matches!(err, ToolError::Duplicate(_)));
        assert_eq!(count_companies(&conn).unwrap(), 1);
    }

    #[test]
    fn test_insert_user_and_lookup_hash() {
        let conn = setup_test_db();
        insert_user(&conn, "alice", "hash-a").unwrap();

        assert_eq!(get_password_hash(&conn, "alice").unwrap().as_deref(), Some("hash-a"));
        assert_eq!(get_password_hash(&conn, "bob").unwrap(), None);
        assert_eq!(get_usernames(&conn).unwrap(), vec!["alice"]);
        assert_eq!(get_users(&conn).unwrap()[0].password_hash, "hash-a");
    }

    #[test]
    fn test_insert_user_if_missing() {
        let conn = setup_test_db();
        assert!(insert_user_if_missing(&conn, "admin", "first").unwrap());
        assert!(!insert_user_if_missing(&conn, "admin", "second").unwrap());

        assert_eq!(count_users(&conn).unwrap(), 1);
        assert_eq!(get_password_hash(&conn, "admin").unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn test_duplicate_user() {
        let conn = setup_test_db();
        insert_user(&conn, "alice", "x").unwrap();
        assert!(insert_user(&conn, "alice", "y").unwrap_err().is_duplicate());
    }

    #[test]
    fn test_otp_secret_company_reference_not_enforced() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO otp_secrets (name, secret, otp_type, refresh_time, company_id)
             VALUES ('GitHub', 'JBSWY3DPEHPK3PXP', 'totp', 30, 99)",
            [],
        ).unwrap();

        let secrets = get_otp_secrets(&conn).unwrap();
        assert_eq!(secrets.len(), 1);
        assert_eq!(secrets[0].company_id, Some(99));
        assert_eq!(secrets[0].refresh_time, 30);
    }

    #[test]
    fn test_delete_all_rows_keeps_tables() {
        let conn = setup_test_db();
        let company = insert_company(&conn, "Acme").unwrap();
        insert_user(&conn, "alice", "x").unwrap();
        conn.execute(
            "INSERT INTO otp_secrets (name, secret, otp_type, refresh_time, company_id)
             VALUES ('VPN', 'ABC', 'totp', 30, ?)",
            params![company],
        ).unwrap();
        assert_eq!(get_table_counts(&conn).unwrap().total(), 3);

        delete_all_rows(&conn).unwrap();

        assert!(get_table_counts(&conn).unwrap().is_empty());
        for table in CLEAR_ORDER {
            assert!(table_exists(&conn, table).unwrap());
        }
    }

    #[test]
    fn test_table_exists() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, "companies").unwrap());
    }
}
