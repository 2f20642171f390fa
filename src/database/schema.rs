//! Database schema definitions

/// SQL to create the OTP secrets table
///
/// `company_id` is a declared foreign key only; SQLite leaves it unenforced
/// unless `PRAGMA foreign_keys` is switched on, which this tool never does.
pub const CREATE_OTP_SECRETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS otp_secrets (
    id              INTEGER PRIMARY KEY,
    name            TEXT NOT NULL,
    secret          TEXT NOT NULL,
    otp_type        TEXT NOT NULL,
    refresh_time    INTEGER NOT NULL,
    company_id      INTEGER,
    FOREIGN KEY (company_id) REFERENCES companies (id)
)
"#;

/// SQL to create the users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id              INTEGER PRIMARY KEY,
    username        TEXT NOT NULL UNIQUE,
    password        TEXT NOT NULL
)
"#;

/// SQL to create the companies table
pub const CREATE_COMPANIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    id              INTEGER PRIMARY KEY,
    name            TEXT NOT NULL UNIQUE
)
"#;

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_OTP_SECRETS_TABLE,
    CREATE_USERS_TABLE,
    CREATE_COMPANIES_TABLE,
];

/// Table names in the order rows must be deleted (dependents first)
pub const CLEAR_ORDER: &[&str] = &["otp_secrets", "users", "companies"];
