//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `auth::AuthError`, `marketplace::MarketplaceError`
//! and `kernel::error::AppError`.

mod config;

use auth::{AuthEngine, InMemoryAuthRepository, PgAuthRepository, auth_routes};
use marketplace::{
    InMemoryAdRepository, PgAdRepository, marketplace_router, marketplace_routes,
};
use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer, ExposeHeaders};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,marketplace=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let api = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let engine = AuthEngine::new(PgAuthRepository::new(pool.clone()), config.auth.clone());

            // Startup cleanup: remove sessions whose refresh token expired
            // Errors here should not prevent server startup
            match engine.cleanup_expired_sessions().await {
                Ok(sessions) => {
                    tracing::info!(
                        sessions_deleted = sessions,
                        "Auth session cleanup completed"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Auth session cleanup failed, continuing anyway"
                    );
                }
            }

            auth_routes(engine.clone())
                .merge(marketplace_router(PgAdRepository::new(pool), engine))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store with random salts");
            let engine = AuthEngine::new(InMemoryAuthRepository::new(), config.auth.clone());
            auth_routes(engine.clone())
                .merge(marketplace_routes(InMemoryAdRepository::new(), engine))
        }
    };

    // CORS configuration
    let allowed_origins: Vec<HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let token_headers = [
        HeaderName::from_bytes(config.auth.access_token_header.as_bytes())?,
        HeaderName::from_bytes(config.auth.refresh_token_header.as_bytes())?,
    ];

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            token_headers[0].clone(),
            token_headers[1].clone(),
        ]))
        .expose_headers(ExposeHeaders::list(token_headers));

    // Build router
    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", config.listen_addr);

    let listener = TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
