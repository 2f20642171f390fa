//! Data models for the TOTP Manager database entities

use serde::{Deserialize, Serialize};

/// Grouping label for OTP secrets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Auto-increment row ID
    pub id: i64,
    /// Unique company name
    pub name: String,
}

/// Login account of the TOTP Manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Auto-increment row ID
    pub id: i64,
    /// Unique username
    pub username: String,
    /// Unsalted SHA-256 hex digest of the password
    pub password_hash: String,
}

/// Shared secret plus metadata used to generate one-time codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpSecret {
    /// Auto-increment row ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Shared secret (as entered, usually base32)
    pub secret: String,
    /// OTP type, e.g. "totp"
    pub otp_type: String,
    /// Code refresh interval in seconds
    pub refresh_time: i64,
    /// Owning company, may point at a removed row
    pub company_id: Option<i64>,
}

/// Row counts of all three tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub companies: u64,
    pub users: u64,
    pub otp_secrets: u64,
}

impl TableCounts {
    /// Total number of rows across all tables
    pub fn total(&self) -> u64 {
        self.companies + self.users + self.otp_secrets
    }

    /// True if every table is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
