//! Token Pair
//!
//! What a successful sign-in or refresh hands back to the caller.

use std::fmt;

use crate::domain::value_object::AccessTokenId;

#[derive(Clone)]
pub struct TokenPair {
    /// Short-lived signed access token
    pub access_token: String,
    /// Long-lived signed refresh token, tracked in the session row
    pub refresh_token: String,
    /// Id embedded in `access_token`, persisted in the session row
    pub access_token_id: AccessTokenId,
    /// Expiry of `refresh_token` (Unix timestamp ms)
    pub refresh_expires_at_ms: i64,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("access_token_id", &self.access_token_id)
            .field("refresh_expires_at_ms", &self.refresh_expires_at_ms)
            .finish()
    }
}
