//! Application Configuration
//!
//! Configuration for the Auth application layer. Both salts are passed in
//! explicitly so tests can use fixed keys.

use std::fmt;
use std::time::Duration;

use platform::crypto::random_bytes;

/// Default access token lifetime (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);
/// Default refresh token lifetime (30 days)
pub const DEFAULT_REFRESH_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 3600);

pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";
pub const REFRESH_TOKEN_HEADER: &str = "X-Refresh-Token";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Appended to every password before hashing
    pub password_salt: Vec<u8>,
    /// HS512 signing key for access and refresh tokens
    pub token_salt: Vec<u8>,
    /// Bounds how long an access token outlives its session after logout
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    /// Request/response header carrying the access token
    pub access_token_header: String,
    /// Request/response header carrying the refresh token
    pub refresh_token_header: String,
}

impl AuthConfig {
    pub fn new(password_salt: impl Into<Vec<u8>>, token_salt: impl Into<Vec<u8>>) -> Self {
        Self {
            password_salt: password_salt.into(),
            token_salt: token_salt.into(),
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
            refresh_token_ttl: DEFAULT_REFRESH_TOKEN_TTL,
            access_token_header: ACCESS_TOKEN_HEADER.to_string(),
            refresh_token_header: REFRESH_TOKEN_HEADER.to_string(),
        }
    }

    /// Create config with random salts (for development)
    ///
    /// Hashes and tokens do not survive a restart.
    pub fn development() -> Self {
        Self::new(random_bytes(32), random_bytes(64))
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    pub fn with_refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = ttl;
        self
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("password_salt", &"[REDACTED]")
            .field("token_salt", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("access_token_header", &self.access_token_header)
            .field("refresh_token_header", &self.refresh_token_header)
            .finish()
    }
}
