//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::application::engine::AuthEngine;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_access_token;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    auth_routes(AuthEngine::new(repo, config))
}

/// Create the Auth router around an existing engine
pub fn auth_routes<R>(engine: AuthEngine<R>) -> Router
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let protected = require_access(
        Router::new().route("/whoami", get(handlers::whoami)),
        engine.clone(),
    );

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/auth", post(handlers::sign_in::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(AuthAppState::new(engine))
        .merge(protected)
}

/// Put every route of `routes` behind `require_access_token`
///
/// Handlers read the caller with `Extension<AuthenticatedUser>`.
pub fn require_access<R>(routes: Router, engine: AuthEngine<R>) -> Router
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    routes.route_layer(middleware::from_fn_with_state(
        AuthAppState::new(engine),
        require_access_token::<R>,
    ))
}
