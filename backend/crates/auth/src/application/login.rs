//! Login Use Case
//!
//! Opens a session for an authenticated user and hands out its first token
//! pair. The only way a session comes into existence.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::entity::token_pair::TokenPair;
use crate::domain::repository::SessionRepository;
use crate::domain::service::token_codec::TokenCodec;
use crate::domain::value_object::UserId;
use crate::error::AuthResult;

/// Login use case
pub struct LoginUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<S> LoginUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, codec: Arc<TokenCodec>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            codec,
            config,
        }
    }

    pub async fn execute(&self, user_id: UserId) -> AuthResult<TokenPair> {
        let tokens = self.codec.issue_pair(
            user_id,
            self.config.access_token_ttl,
            self.config.refresh_token_ttl,
        )?;

        let session = Session::new(user_id, &tokens);
        self.session_repo.create_session(&session).await?;

        tracing::info!(
            user_id = %user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(tokens)
    }
}
