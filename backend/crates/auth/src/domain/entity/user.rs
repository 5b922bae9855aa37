//! User Entity
//!
//! Identity as held by the credential store. Immutable once registered.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Login, PasswordHash, UserId};

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique across all users
    pub login: Login,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(login: Login, password_hash: PasswordHash) -> Self {
        Self {
            user_id: UserId::new(),
            login,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
