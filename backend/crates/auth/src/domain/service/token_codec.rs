//! Token Codec
//!
//! Issues and verifies the two signed token kinds. Both are HS512 JWTs signed
//! with the same server-held key (the token salt).
//!
//! | token   | claims                          |
//! |---------|---------------------------------|
//! | access  | `userId`, `aid`, `iat`, `exp`   |
//! | refresh | `userId`, `jti`, `iat`, `exp`   |
//!
//! `jti` is random so that refresh tokens issued in the same second for the
//! same user still differ. The codec holds no mutable state.

use std::time::Duration;

use chrono::Utc;
use platform::jwt::{Hs512, JwtError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entity::token_pair::TokenPair;
use crate::domain::value_object::{AccessTokenId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("unexpected signing algorithm {0}")]
    UnsupportedAlgorithm(String),

    #[error("token expired")]
    Expired,

    #[error("token signing error: {0}")]
    Signing(String),
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Malformed => TokenError::Malformed,
            JwtError::InvalidSignature => TokenError::InvalidSignature,
            JwtError::UnsupportedAlgorithm(alg) => TokenError::UnsupportedAlgorithm(alg),
            JwtError::Serialization(msg) => TokenError::Signing(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "aid")]
    pub access_token_id: AccessTokenId,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// A token is usable strictly before its `exp` second.
fn check_expiry(exp: i64, now: i64) -> Result<(), TokenError> {
    if now >= exp {
        return Err(TokenError::Expired);
    }
    Ok(())
}

fn expiry(now: i64, ttl: Duration) -> i64 {
    let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
    now.saturating_add(ttl_secs)
}

#[derive(Debug, Clone)]
pub struct TokenCodec {
    signer: Hs512,
}

impl TokenCodec {
    pub fn new(token_salt: impl AsRef<[u8]>) -> Self {
        Self {
            signer: Hs512::new(token_salt),
        }
    }

    pub fn issue_access_token(
        &self,
        user_id: UserId,
        access_token_id: AccessTokenId,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.issue_access_token_at(user_id, access_token_id, ttl, Utc::now().timestamp())
    }

    pub(crate) fn issue_access_token_at(
        &self,
        user_id: UserId,
        access_token_id: AccessTokenId,
        ttl: Duration,
        now: i64,
    ) -> Result<String, TokenError> {
        let claims = AccessClaims {
            user_id,
            access_token_id,
            iat: now,
            exp: expiry(now, ttl),
        };
        Ok(self.signer.encode(&claims)?)
    }

    pub fn issue_refresh_token(&self, user_id: UserId, ttl: Duration) -> Result<String, TokenError> {
        self.issue_refresh_token_at(user_id, ttl, Utc::now().timestamp())
            .map(|(token, _)| token)
    }

    /// Returns the token and its `exp`
    pub(crate) fn issue_refresh_token_at(
        &self,
        user_id: UserId,
        ttl: Duration,
        now: i64,
    ) -> Result<(String, i64), TokenError> {
        let claims = RefreshClaims {
            user_id,
            jti: Uuid::new_v4(),
            iat: now,
            exp: expiry(now, ttl),
        };
        Ok((self.signer.encode(&claims)?, claims.exp))
    }

    /// Issue a fresh pair with a new access-token id
    pub fn issue_pair(
        &self,
        user_id: UserId,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<TokenPair, TokenError> {
        let now = Utc::now().timestamp();
        let access_token_id = AccessTokenId::new();
        let access_token = self.issue_access_token_at(user_id, access_token_id, access_ttl, now)?;
        let (refresh_token, refresh_exp) = self.issue_refresh_token_at(user_id, refresh_ttl, now)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_token_id,
            refresh_expires_at_ms: refresh_exp.saturating_mul(1000),
        })
    }

    /// Verify signature and expiry of an access token
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.verify_access_at(token, Utc::now().timestamp())
    }

    pub(crate) fn verify_access_at(&self, token: &str, now: i64) -> Result<AccessClaims, TokenError> {
        let claims = self.verify_access_signature(token)?;
        check_expiry(claims.exp, now)?;
        Ok(claims)
    }

    /// Verify only the signature of an access token
    ///
    /// Used when refreshing: the access token may already have lapsed and is
    /// read only for its `aid`.
    pub fn verify_access_signature(&self, token: &str) -> Result<AccessClaims, TokenError> {
        Ok(self.signer.decode(token)?)
    }

    /// Verify signature and expiry of a refresh token
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        self.verify_refresh_at(token, Utc::now().timestamp())
    }

    pub(crate) fn verify_refresh_at(&self, token: &str, now: i64) -> Result<RefreshClaims, TokenError> {
        let claims: RefreshClaims = self.signer.decode(token)?;
        check_expiry(claims.exp, now)?;
        Ok(claims)
    }
}
