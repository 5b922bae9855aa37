//! Verify Credentials Use Case
//!
//! Resolves a login/password pair to a user id.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{Login, PasswordHash, RawPassword, UserId};
use crate::error::{AuthError, AuthResult};

/// Verify credentials use case
pub struct VerifyCredentialsUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> VerifyCredentialsUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            config,
        }
    }

    /// Unknown login and wrong password both yield `InvalidCredentials`
    pub async fn execute(&self, login: String, password: String) -> AuthResult<UserId> {
        let login = Login::new(login)?;
        let password = RawPassword::new(password)?;

        let Some(user) = self.credential_repo.find_user_by_login(&login).await? else {
            // Hash anyway so an unknown login costs the same as a wrong password
            let _ = PasswordHash::from_raw(&password, &self.config.password_salt);
            return Err(AuthError::InvalidCredentials);
        };

        if !user
            .password_hash
            .verify(&password, &self.config.password_salt)
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.user_id)
    }
}
