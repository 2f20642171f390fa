//! Password hashing for seeded user accounts

mod sha256;

pub use sha256::{sha256_hex, hash_password, verify_password};
