//! Login Value Object
//!
//! The login is the unique handle a user signs in with.
//!
//! ## Invariants
//! - Length: 3 to 32 characters
//! - Characters: ASCII letters, digits and `_` only
//! - Case is preserved and significant (`Alice` and `alice` are different logins)

use derive_more::Display;
use thiserror::Error;

pub const LOGIN_MIN_LENGTH: usize = 3;
pub const LOGIN_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Login must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Login must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Login may only contain letters, digits and underscores (found {0:?})")]
    InvalidCharacter(char),
}

/// Validated login
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Login(String);

impl Login {
    pub fn new(raw: impl Into<String>) -> Result<Self, LoginError> {
        let raw = raw.into();
        let char_count = raw.chars().count();

        if char_count < LOGIN_MIN_LENGTH {
            return Err(LoginError::TooShort {
                min: LOGIN_MIN_LENGTH,
                actual: char_count,
            });
        }
        if char_count > LOGIN_MAX_LENGTH {
            return Err(LoginError::TooLong {
                max: LOGIN_MAX_LENGTH,
                actual: char_count,
            });
        }
        if let Some(bad) = raw.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(LoginError::InvalidCharacter(bad));
        }

        Ok(Self(raw))
    }

    /// Restore from storage; rows were validated on the way in
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
