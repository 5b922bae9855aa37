//! Auth Middleware
//!
//! Middleware for requiring a valid access token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::headers::require_header;

use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::domain::value_object::UserId;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// User id of a verified access token, stored in request extensions
///
/// Handlers take it with `Extension<AuthenticatedUser>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

/// Middleware that requires a valid access token
pub async fn require_access_token<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = require_header(req.headers(), &state.engine.config().access_token_header)?;
    let user_id = state.engine.check_access(&token)?;

    req.extensions_mut().insert(AuthenticatedUser(user_id));

    Ok(next.run(req).await)
}
