//! Password Value Objects
//!
//! Domain wrappers over `platform::password`:
//! - [`RawPassword`]: validated user input, zeroized on drop
//! - [`PasswordHash`]: salted digest as stored in the credential store

use std::fmt;

use platform::password::{ClearTextPassword, PasswordPolicyError, SaltedDigest};

/// Raw password from user input
///
/// Rules: at least 8 characters, at least one letter and one digit.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Stored password digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(SaltedDigest);

impl PasswordHash {
    /// Hash a validated password with the server-wide salt
    pub fn from_raw(raw: &RawPassword, salt: &[u8]) -> Self {
        Self(raw.0.digest(salt))
    }

    pub fn from_db(hex: String) -> Self {
        Self(SaltedDigest::from_hex(hex))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn verify(&self, raw: &RawPassword, salt: &[u8]) -> bool {
        self.0.verify(&raw.0, salt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("Secret123".into()).unwrap();
        let hash = PasswordHash::from_raw(&raw, b"salt");

        assert!(hash.verify(&raw, b"salt"));
        assert!(!hash.verify(&RawPassword::new("Secret124".into()).unwrap(), b"salt"));

        let restored = PasswordHash::from_db(hash.as_str().to_string());
        assert_eq!(restored, hash);
    }

    #[test]
    fn test_same_password_same_digest() {
        let a = PasswordHash::from_raw(&RawPassword::new("Secret123".into()).unwrap(), b"s");
        let b = PasswordHash::from_raw(&RawPassword::new("Secret123".into()).unwrap(), b"s");
        assert_eq!(a, b);
    }

    #[test]
    fn test_policy_errors_surface() {
        assert!(RawPassword::new("short1".into()).is_err());
        assert!(RawPassword::new("nodigitshere".into()).is_err());
        assert!(RawPassword::new("1234567890".into()).is_err());
    }

    #[test]
    fn test_debug_redacted() {
        let raw = RawPassword::new("Secret123".into()).unwrap();
        assert!(!format!("{raw:?}").contains("Secret123"));
    }
}
