//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::session::{Session, SessionRotation};
use crate::domain::entity::user::User;
use crate::domain::value_object::{AccessTokenId, Login, UserId};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find user by login
    async fn find_user_by_login(&self, login: &Login) -> AuthResult<Option<User>>;

    /// Create a new user
    ///
    /// Fails with `AuthError::UserAlreadyExists` when the login is taken,
    /// including when a concurrent registration won the race.
    async fn create_user(&self, user: &User) -> AuthResult<()>;
}

/// Session store
///
/// Every operation touches a single row.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create_session(&self, session: &Session) -> AuthResult<()>;

    /// Find the session of `user_id` currently holding `refresh_token`
    async fn find_session_by_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &str,
    ) -> AuthResult<Option<Session>>;

    /// Replace refresh token and access-token id if the row still holds the
    /// expected values. Returns `false` if it did not.
    async fn rotate_session(&self, rotation: &SessionRotation) -> AuthResult<bool>;

    /// Delete the session bound to `access_token_id`. Returns `false` if none.
    async fn delete_session_by_access_token_id(
        &self,
        access_token_id: &AccessTokenId,
    ) -> AuthResult<bool>;

    /// Delete sessions whose refresh token has expired
    async fn cleanup_expired_sessions(&self) -> AuthResult<u64>;
}
