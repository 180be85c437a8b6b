//! Secure password hashing and verification using Argon2.
//!
//! Passwords are hashed with a per-password random salt using the Argon2
//! algorithm; the resulting PHC string carries the salt and parameters needed
//! for later verification.
//!
//! # Usage
//!
//! The module provides two main functions:
//! - [`generate_password_hash`]: create secure password hashes
//! - [`is_password_valid`]: verify passwords against stored hashes
//!
//! # Examples
//!
//! ```rust
//! use warden_auth::password_hash::{generate_password_hash, is_password_valid};
//!
//! let password = "user_password_123";
//! let hash = generate_password_hash(password).unwrap();
//!
//! let is_valid = is_password_valid(password, &hash).unwrap();
//! assert!(is_valid);
//!
//! let is_valid = is_password_valid("wrong_password", &hash).unwrap();
//! assert!(!is_valid);
//! ```

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Generates a secure hash for the provided password.
///
/// A fresh random salt is generated for every call, so hashing the same
/// password twice yields different strings. The returned hash is safe to
/// store.
///
/// # Arguments
///
/// * `pw` - The plaintext password to hash
///
/// # Returns
///
/// * `Ok(String)` - Secure hash ready for storage
/// * `Err(Error)` - Password hashing errors
pub fn generate_password_hash(pw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// Extracts the salt and parameters from the hash string and re-computes the
/// hash for comparison. A mismatch is a normal negative result, not an
/// error; only a malformed stored hash fails.
///
/// # Arguments
///
/// * `pw` - The plaintext password to verify
/// * `hash` - The stored hash string to verify against
///
/// # Returns
///
/// * `Ok(true)` - Password matches the hash
/// * `Ok(false)` - Password does not match the hash
/// * `Err(Error)` - Hash parsing errors
pub fn is_password_valid(pw: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(pw.as_bytes(), &hash.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_original_password() -> Result<()> {
        let hash = generate_password_hash("correct horse battery staple")?;
        assert!(is_password_valid("correct horse battery staple", &hash)?);
        Ok(())
    }

    #[test]
    fn hash_rejects_other_passwords() -> Result<()> {
        let hash = generate_password_hash("correct horse battery staple")?;
        assert!(!is_password_valid("Tr0ub4dor&3", &hash)?);
        assert!(!is_password_valid("", &hash)?);
        Ok(())
    }

    #[test]
    fn hashes_are_salted() -> Result<()> {
        let first = generate_password_hash("same password")?;
        let second = generate_password_hash("same password")?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(is_password_valid("anything", "not-a-phc-string").is_err());
    }
}
