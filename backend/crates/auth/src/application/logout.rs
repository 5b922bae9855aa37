//! Logout Use Case
//!
//! Deletes the session bound to the access token. The access token itself
//! remains valid until it expires.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::domain::service::token_codec::TokenCodec;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    codec: Arc<TokenCodec>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, codec: Arc<TokenCodec>) -> Self {
        Self {
            session_repo,
            codec,
        }
    }

    pub async fn execute(&self, access_token: &str) -> AuthResult<()> {
        let claims = self.codec.verify_access(access_token)?;

        let deleted = self
            .session_repo
            .delete_session_by_access_token_id(&claims.access_token_id)
            .await?;
        if !deleted {
            return Err(AuthError::SessionNotFound);
        }

        tracing::info!(user_id = %claims.user_id, "User signed out");
        Ok(())
    }
}
