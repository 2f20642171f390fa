//! Database layer for the TOTP Manager database
//!
//! Handles SQLite database operations including:
//! - Schema creation
//! - Inserts and listings for companies and users
//! - Bulk row deletion

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;
