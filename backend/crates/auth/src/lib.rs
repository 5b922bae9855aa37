//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, token codec, repository traits
//! - `application/` - Use cases and the `AuthEngine` facade
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and sign in with login + password
//! - Short-lived access tokens, long-lived refresh tokens (HS512 JWT)
//! - Refresh token rotation with token pair mismatch detection
//! - Logout by access token
//!
//! ## Security Model
//! - Passwords stored as salted SHA-512 digests
//! - Access tokens are verified statelessly and stay valid until they expire,
//!   even after logout; keep their TTL short
//! - Refresh tokens are single use: each refresh replaces the session's
//!   refresh token and access-token id in one conditional update

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::engine::AuthEngine;
pub use domain::entity::token_pair::TokenPair;
pub use error::{AuthError, AuthResult, UnauthorizedReason};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic, auth_routes, require_access};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
