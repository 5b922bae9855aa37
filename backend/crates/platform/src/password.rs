//! Password Handling
//!
//! - Format policy: minimum length plus at least one letter and one digit
//! - Zeroization of clear text on drop
//! - Salted SHA-512 digests, verified by recomputation in constant time
//!
//! The digest is `hex(SHA-512(password ‖ salt))` with one server-wide salt.
//! It is deterministic by construction; the salt is passed in explicitly so
//! tests can inject a fixed value.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, sha512};

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one letter")]
    MissingLetter,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Clear text password with automatic memory zeroization
///
/// - Does not implement `Clone`
/// - Debug output is redacted
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("Secret123".to_string()).unwrap();
/// assert_eq!(format!("{password:?}"), "ClearTextPassword(\"[REDACTED]\")");
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate and wrap a password
    ///
    /// Checks run in a fixed order (length, letter, digit) and never look at
    /// any stored state.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        // Wrap first so the input is zeroized even when validation fails.
        let password = Self(raw);

        let char_count = password.0.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if !password.0.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(PasswordPolicyError::MissingLetter);
        }

        if !password.0.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(password)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Compute the salted digest of this password
    pub fn digest(&self, salt: &[u8]) -> SaltedDigest {
        SaltedDigest(hex::encode(sha512(&[self.as_bytes(), salt])))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Lowercase hex SHA-512 digest of `password ‖ salt`
#[derive(Clone, PartialEq, Eq)]
pub struct SaltedDigest(String);

impl SaltedDigest {
    /// Wrap a digest loaded from storage
    pub fn from_hex(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recompute the digest for `password` and compare byte-wise
    pub fn verify(&self, password: &ClearTextPassword, salt: &[u8]) -> bool {
        let candidate = password.digest(salt);
        constant_time_eq(self.0.as_bytes(), candidate.0.as_bytes())
    }
}

impl fmt::Debug for SaltedDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Digest prefix is enough to correlate in logs
        let prefix: String = self.0.chars().take(8).collect();
        f.debug_tuple("SaltedDigest")
            .field(&format!("{prefix}..."))
            .finish()
    }
}
