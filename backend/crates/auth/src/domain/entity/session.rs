//! Session Entity
//!
//! One row per refresh-token lineage. Created by sign-in, rewritten in place
//! by every refresh, deleted by logout:
//!
//! ```text
//! none --login--> active --refresh--> active' --refresh--> ... --logout--> deleted
//! ```
//!
//! `access_token_id` always names the most recently issued access token of
//! the lineage. Nothing leaves `deleted`.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::entity::token_pair::TokenPair;
use crate::domain::value_object::{AccessTokenId, SessionId, UserId};

#[derive(Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Current refresh token value (unique across sessions)
    pub refresh_token: String,
    /// Id of the current access token
    pub access_token_id: AccessTokenId,
    /// Refresh token expiry (Unix timestamp ms), used by cleanup only
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Open a new session for a freshly issued pair
    pub fn new(user_id: UserId, tokens: &TokenPair) -> Self {
        let now = Utc::now();
        Self {
            session_id: SessionId::new(),
            user_id,
            refresh_token: tokens.refresh_token.clone(),
            access_token_id: tokens.access_token_id,
            expires_at_ms: tokens.refresh_expires_at_ms,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    /// Expired from the refresh token's `exp` onwards
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// Describe replacing this session's pair with `tokens`
    pub fn rotation(&self, tokens: &TokenPair) -> SessionRotation {
        SessionRotation {
            session_id: self.session_id,
            expected_refresh_token: self.refresh_token.clone(),
            expected_access_token_id: self.access_token_id,
            new_refresh_token: tokens.refresh_token.clone(),
            new_access_token_id: tokens.access_token_id,
            expires_at_ms: tokens.refresh_expires_at_ms,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &self.session_id)
            .field("user_id", &self.user_id)
            .field("refresh_token", &"[REDACTED]")
            .field("access_token_id", &self.access_token_id)
            .field("expires_at_ms", &self.expires_at_ms)
            .finish_non_exhaustive()
    }
}

/// Compare-and-swap update of a session row
///
/// Applied only if the row still holds both expected values, so of two
/// concurrent refreshes of the same pair at most one is applied.
#[derive(Clone)]
pub struct SessionRotation {
    pub session_id: SessionId,
    pub expected_refresh_token: String,
    pub expected_access_token_id: AccessTokenId,
    pub new_refresh_token: String,
    pub new_access_token_id: AccessTokenId,
    pub expires_at_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(refresh: &str, expires_at_ms: i64) -> TokenPair {
        TokenPair {
            access_token: "a".into(),
            refresh_token: refresh.into(),
            access_token_id: AccessTokenId::new(),
            refresh_expires_at_ms: expires_at_ms,
        }
    }

    #[test]
    fn test_new_session_binds_pair() {
        let user_id = UserId::new();
        let tokens = pair("r1", i64::MAX);
        let session = Session::new(user_id, &tokens);

        assert_eq!(session.user_id, user_id);
        assert_eq!(session.refresh_token, "r1");
        assert_eq!(session.access_token_id, tokens.access_token_id);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_rotation_carries_expected_and_new_values() {
        let first = pair("r1", i64::MAX);
        let session = Session::new(UserId::new(), &first);
        let second = pair("r2", 42);

        let rotation = session.rotation(&second);
        assert_eq!(rotation.session_id, session.session_id);
        assert_eq!(rotation.expected_refresh_token, "r1");
        assert_eq!(rotation.expected_access_token_id, first.access_token_id);
        assert_eq!(rotation.new_refresh_token, "r2");
        assert_eq!(rotation.new_access_token_id, second.access_token_id);
        assert_eq!(rotation.expires_at_ms, 42);
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let session = Session::new(UserId::new(), &pair("r1", 1_000));
        assert!(!session.is_expired_at(999));
        assert!(session.is_expired_at(1_000));
        assert!(session.is_expired_at(1_001));
    }

    #[test]
    fn test_expired_and_debug() {
        let session = Session::new(UserId::new(), &pair("secret-refresh", 0));
        assert!(session.is_expired());
        assert!(!format!("{session:?}").contains("secret-refresh"));
    }
}
