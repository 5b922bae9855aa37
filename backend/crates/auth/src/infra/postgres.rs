//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::session::{Session, SessionRotation};
use crate::domain::entity::user::User;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::domain::value_object::{AccessTokenId, Login, PasswordHash, SessionId, UserId};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAuthRepository {
    async fn find_user_by_login(&self, login: &Login) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                login,
                password_hash,
                created_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn create_user(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                login,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.login.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UserAlreadyExists
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create_session(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                user_id,
                refresh_token,
                access_token_id,
                expires_at_ms,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.user_id.as_uuid())
        .bind(&session.refresh_token)
        .bind(session.access_token_id.as_uuid())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_session_by_refresh_token(
        &self,
        user_id: &UserId,
        refresh_token: &str,
    ) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                refresh_token,
                access_token_id,
                expires_at_ms,
                created_at,
                updated_at
            FROM auth_sessions
            WHERE user_id = $1 AND refresh_token = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(refresh_token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn rotate_session(&self, rotation: &SessionRotation) -> AuthResult<bool> {
        // Single conditional UPDATE: the row lock serializes concurrent
        // rotations and the loser matches zero rows.
        let updated = sqlx::query(
            r#"
            UPDATE auth_sessions
            SET refresh_token = $4,
                access_token_id = $5,
                expires_at_ms = $6,
                updated_at = NOW()
            WHERE session_id = $1
              AND refresh_token = $2
              AND access_token_id = $3
            "#,
        )
        .bind(rotation.session_id.as_uuid())
        .bind(&rotation.expected_refresh_token)
        .bind(rotation.expected_access_token_id.as_uuid())
        .bind(&rotation.new_refresh_token)
        .bind(rotation.new_access_token_id.as_uuid())
        .bind(rotation.expires_at_ms)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }

    async fn delete_session_by_access_token_id(
        &self,
        access_token_id: &AccessTokenId,
    ) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE access_token_id = $1")
            .bind(access_token_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn cleanup_expired_sessions(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    login: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            login: Login::from_db(self.login),
            password_hash: PasswordHash::from_db(self.password_hash),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    refresh_token: String,
    access_token_id: Uuid,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: SessionId::from_uuid(self.session_id),
            user_id: UserId::from_uuid(self.user_id),
            refresh_token: self.refresh_token,
            access_token_id: AccessTokenId::from_uuid(self.access_token_id),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
