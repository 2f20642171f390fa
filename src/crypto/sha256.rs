//! SHA-256 password hashing
//!
//! The TOTP Manager compares logins against an unsalted SHA-256 hex digest,
//! so that is exactly what gets stored.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 hash of input string and return as lowercase hex string (64 chars)
///
/// # Example
///
/// ```
/// use otpdb::crypto::sha256_hex;
///
/// assert_eq!(
///     sha256_hex("1234"),
///     "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
/// );
/// ```
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    result.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Hash a password for storage in the users table
pub fn hash_password(password: &str) -> String {
    sha256_hex(password)
}

/// Check a plaintext password against a stored hash
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(stored_hash)
}
