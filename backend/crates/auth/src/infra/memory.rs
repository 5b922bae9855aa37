//! In-Memory Repository Implementation
//!
//! Process-local store for tests and database-less local runs. A single
//! mutex guards both tables, so every operation is linearizable and the
//! uniqueness and compare-and-swap rules match the PostgreSQL schema.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entity::session::{Session, SessionRotation};
use crate::domain::entity::user::User;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::domain::value_object::{AccessTokenId, Login, SessionId, UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    /// Keyed by login
    users: HashMap<String, User>,
    sessions: HashMap<SessionId, Session>,
}

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.lock().await.users.len()
    }

    pub async fn session_count(&self) -> usize {
        self.tables.lock().await.sessions.len()
    }
}

impl CredentialRepository for InMemoryAuthRepository {
    async fn find_user_by_login(&self, login: &Login) -> AuthResult<Option<User>> {
        Ok(self.tables.lock().await.users.get(login.as_str()).cloned())
    }

    async fn create_user(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.lock().await;
        if tables.users.contains_key(user.login.as_str()) {
            return Err(AuthError::UserAlreadyExists);
        }
        tables
            .users
            .insert(user.login.as_str().to_string(), user.clone());
        Ok(())
    }
}

impl SessionRepository for InMemoryAuthRepository {
    async fn create_session(&self, session: &Session) -> AuthResult<()> {
        let mut tables = self.tables.lock().await;
        let duplicate = tables.sessions.values().any(|s| {
            s.refresh_token == session.refresh_token || s.access_token_id == session.access_token_id
        });
        if duplicate || tables.sessions.contains_key(&session.session_id) {
            return Err(AuthError::Internal("duplicate session key".to_string()));
        }
        tables.sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_session_by_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &str,
    ) -> AuthResult<Option<Session>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .sessions
            .values()
            .find(|s| s.user_id == *user_id && s.refresh_token == refresh_token)
            .cloned())
    }

    async fn rotate_session(&self, rotation: &SessionRotation) -> AuthResult<bool> {
        let mut tables = self.tables.lock().await;
        let Some(session) = tables.sessions.get_mut(&rotation.session_id) else {
            return Ok(false);
        };
        if session.refresh_token != rotation.expected_refresh_token
            || session.access_token_id != rotation.expected_access_token_id
        {
            return Ok(false);
        }

        session.refresh_token = rotation.new_refresh_token.clone();
        session.access_token_id = rotation.new_access_token_id;
        session.expires_at_ms = rotation.expires_at_ms;
        session.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete_session_by_access_token_id(
        &self,
        access_token_id: &AccessTokenId,
    ) -> AuthResult<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.sessions.len();
        tables
            .sessions
            .retain(|_, s| s.access_token_id != *access_token_id);
        Ok(tables.sessions.len() < before)
    }

    async fn cleanup_expired_sessions(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut tables = self.tables.lock().await;
        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| !s.is_expired_at(now_ms));
        Ok((before - tables.sessions.len()) as u64)
    }
}
