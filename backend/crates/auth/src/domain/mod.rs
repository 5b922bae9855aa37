//! Domain Layer
//!
//! Contains entities, value objects, the token codec and repository traits.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::{session::Session, token_pair::TokenPair, user::User};
pub use repository::{CredentialRepository, SessionRepository};
pub use service::token_codec::{TokenCodec, TokenError};
