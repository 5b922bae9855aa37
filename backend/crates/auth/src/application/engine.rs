//! Auth Engine
//!
//! Facade over the use cases. Owns the repository, the token codec and the
//! configuration, and hands out plain values (user ids, token pairs) so
//! callers thread identity explicitly.

use std::sync::Arc;

use crate::application::check_access::CheckAccessUseCase;
use crate::application::config::AuthConfig;
use crate::application::login::LoginUseCase;
use crate::application::logout::LogoutUseCase;
use crate::application::refresh::RefreshUseCase;
use crate::application::register::{RegisterInput, RegisterOutput, RegisterUseCase};
use crate::application::verify_credentials::VerifyCredentialsUseCase;
use crate::domain::entity::token_pair::TokenPair;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::domain::service::token_codec::TokenCodec;
use crate::domain::value_object::UserId;
use crate::error::AuthResult;

pub struct AuthEngine<R>
where
    R: CredentialRepository + SessionRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
}

impl<R> Clone for AuthEngine<R>
where
    R: CredentialRepository + SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            codec: self.codec.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthEngine<R>
where
    R: CredentialRepository + SessionRepository + Send + Sync + 'static,
{
    /// The token codec is keyed with `config.token_salt`
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let codec = TokenCodec::new(&config.token_salt);
        Self {
            repo: Arc::new(repo),
            codec: Arc::new(codec),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn register(&self, login: String, password: String) -> AuthResult<RegisterOutput> {
        RegisterUseCase::new(self.repo.clone(), self.config.clone())
            .execute(RegisterInput { login, password })
            .await
    }

    pub async fn verify_credentials(&self, login: String, password: String) -> AuthResult<UserId> {
        VerifyCredentialsUseCase::new(self.repo.clone(), self.config.clone())
            .execute(login, password)
            .await
    }

    pub async fn login(&self, user_id: UserId) -> AuthResult<TokenPair> {
        LoginUseCase::new(self.repo.clone(), self.codec.clone(), self.config.clone())
            .execute(user_id)
            .await
    }

    /// Verify credentials, then open a session
    pub async fn sign_in(&self, login: String, password: String) -> AuthResult<(UserId, TokenPair)> {
        let user_id = self.verify_credentials(login, password).await?;
        let tokens = self.login(user_id).await?;
        Ok((user_id, tokens))
    }

    pub fn check_access(&self, access_token: &str) -> AuthResult<UserId> {
        CheckAccessUseCase::new(self.codec.clone()).execute(access_token)
    }

    pub async fn refresh(&self, refresh_token: &str, access_token: &str) -> AuthResult<TokenPair> {
        RefreshUseCase::new(self.repo.clone(), self.codec.clone(), self.config.clone())
            .execute(refresh_token, access_token)
            .await
    }

    pub async fn logout(&self, access_token: &str) -> AuthResult<()> {
        LogoutUseCase::new(self.repo.clone(), self.codec.clone())
            .execute(access_token)
            .await
    }

    /// Delete sessions whose refresh token has expired
    pub async fn cleanup_expired_sessions(&self) -> AuthResult<u64> {
        let deleted = self.repo.cleanup_expired_sessions().await?;
        if deleted > 0 {
            tracing::info!(deleted, "Expired sessions removed");
        }
        Ok(deleted)
    }
}
