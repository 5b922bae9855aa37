//! Marketplace Router

use auth::AuthEngine;
use auth::domain::repository::{CredentialRepository, SessionRepository};
use auth::require_access;
use axum::{Router, routing::post};

use crate::domain::repository::AdRepository;
use crate::infra::postgres::PgAdRepository;
use crate::presentation::handlers::{self, MarketplaceAppState};

/// Create the Marketplace router with PostgreSQL repository
pub fn marketplace_router<R>(repo: PgAdRepository, engine: AuthEngine<R>) -> Router
where
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    marketplace_routes(repo, engine)
}

/// Create the Marketplace router for any repository; every route requires
/// an access token checked by `engine`
pub fn marketplace_routes<A, R>(repo: A, engine: AuthEngine<R>) -> Router
where
    A: AdRepository + Clone + Send + Sync + 'static,
    R: CredentialRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let routes = Router::new()
        .route("/create", post(handlers::create_ad::<A>))
        .with_state(MarketplaceAppState::new(repo));

    require_access(routes, engine)
}
