//! Refresh Use Case
//!
//! Rotates a session's token pair. The presented access token must be the
//! one most recently issued for the session holding the refresh token:
//!
//! 1. refresh token: signature and expiry
//! 2. access token: signature only (it has usually lapsed by now)
//! 3. session lookup by (user, refresh token) → `EntityNotFound`
//! 4. access-token id comparison → `TokenPairMismatch`
//! 5. compare-and-swap of the session row to the new pair
//!
//! A rotated refresh token no longer matches any row, so replaying it fails
//! at step 3.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::token_pair::TokenPair;
use crate::domain::repository::SessionRepository;
use crate::domain::service::token_codec::TokenCodec;
use crate::error::{AuthResult, UnauthorizedReason};

/// Refresh use case
pub struct RefreshUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<S> RefreshUseCase<S>
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

    pub async fn execute(&self, refresh_token: &str, access_token: &str) -> AuthResult<TokenPair> {
        let refresh_claims = self.codec.verify_refresh(refresh_token)?;
        let access_claims = self.codec.verify_access_signature(access_token)?;

        let user_id = refresh_claims.user_id;
        let session = self
            .session_repo
            .find_session_by_refresh_token(&user_id, refresh_token)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Refresh with unknown or rotated refresh token");
                UnauthorizedReason::EntityNotFound
            })?;

        if session.access_token_id != access_claims.access_token_id {
            tracing::warn!(
                user_id = %user_id,
                session_id = %session.session_id,
                "Refresh token presented with a stale access token"
            );
            return Err(UnauthorizedReason::TokenPairMismatch.into());
        }

        let tokens = self.codec.issue_pair(
            user_id,
            self.config.access_token_ttl,
            self.config.refresh_token_ttl,
        )?;

        // Lost the race against a concurrent refresh of the same pair
        if !self
            .session_repo
            .rotate_session(&session.rotation(&tokens))
            .await?
        {
            tracing::warn!(
                session_id = %session.session_id,
                "Concurrent refresh detected, rotation rejected"
            );
            return Err(UnauthorizedReason::TokenPairMismatch.into());
        }

        tracing::info!(
            user_id = %user_id,
            session_id = %session.session_id,
            "Token pair rotated"
        );

        Ok(tokens)
    }
}
