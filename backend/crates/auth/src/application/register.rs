//! Register Use Case
//!
//! Creates a new user with a unique login.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{Login, PasswordHash, RawPassword, UserId};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub login: String,
    pub password: String,
}

/// Register output
#[derive(Debug, Clone)]
pub struct RegisterOutput {
    pub user_id: UserId,
    pub login: Login,
}

/// Register use case
pub struct RegisterUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> RegisterUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate both fields before touching the store
        let login = Login::new(input.login)?;
        let password = RawPassword::new(input.password)?;

        if self
            .credential_repo
            .find_user_by_login(&login)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = PasswordHash::from_raw(&password, &self.config.password_salt);
        let user = User::new(login, password_hash);

        // A concurrent registration may still win here; the store reports it
        // as UserAlreadyExists through its unique constraint.
        self.credential_repo.create_user(&user).await?;

        tracing::info!(user_id = %user.user_id, login = %user.login, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
            login: user.login,
        })
    }
}
