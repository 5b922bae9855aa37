//! Check Access Use Case
//!
//! Stateless: the access token is verified cryptographically and the session
//! store is not consulted. An access token therefore stays usable until its
//! own expiry even after its session was logged out.

use std::sync::Arc;

use crate::domain::service::token_codec::TokenCodec;
use crate::domain::value_object::UserId;
use crate::error::AuthResult;

/// Check access use case
pub struct CheckAccessUseCase {
    codec: Arc<TokenCodec>,
}

impl CheckAccessUseCase {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    pub fn execute(&self, access_token: &str) -> AuthResult<UserId> {
        let claims = self.codec.verify_access(access_token)?;
        Ok(claims.user_id)
    }
}
