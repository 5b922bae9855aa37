//! HTTP Handlers

use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};

use platform::headers::{header_pair, require_header};

use crate::application::engine::AuthEngine;
use crate::domain::entity::token_pair::TokenPair;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{CredentialsRequest, RegisterResponse, StatusResponse, WhoAmIResponse};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub engine: AuthEngine<R>,
}

impl<R> AuthAppState<R>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(engine: AuthEngine<R>) -> Self {
        Self { engine }
    }
}

/// Response headers carrying a token pair
fn token_headers<R>(
    state: &AuthAppState<R>,
    tokens: &TokenPair,
) -> AuthResult<[(HeaderName, HeaderValue); 2]>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let config = state.engine.config();
    Ok([
        header_pair(&config.access_token_header, &tokens.access_token)?,
        header_pair(&config.refresh_token_header, &tokens.refresh_token)?,
    ])
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<CredentialsRequest>,
) -> AuthResult<Json<RegisterResponse>>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let output = state.engine.register(req.login, req.password).await?;

    Ok(Json(RegisterResponse {
        user_id: output.user_id,
        login: output.login.to_string(),
    }))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<CredentialsRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let (_, tokens) = state.engine.sign_in(req.login, req.password).await?;

    Ok((
        StatusCode::OK,
        token_headers(&state, &tokens)?,
        Json(StatusResponse::ok()),
    ))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let config = state.engine.config();
    let access_token = require_header(&headers, &config.access_token_header)?;
    let refresh_token = require_header(&headers, &config.refresh_token_header)?;

    let tokens = state.engine.refresh(&refresh_token, &access_token).await?;

    Ok((
        StatusCode::OK,
        token_headers(&state, &tokens)?,
        Json(StatusResponse::ok()),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<StatusResponse>>
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let access_token = require_header(&headers, &state.engine.config().access_token_header)?;
    state.engine.logout(&access_token).await?;

    Ok(Json(StatusResponse::ok()))
}

// ============================================================================
// Who Am I
// ============================================================================

/// GET /api/whoami (behind `require_access_token`)
pub async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse { user_id: user.0 })
}
