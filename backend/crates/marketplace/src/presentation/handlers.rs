//! HTTP Handlers

use std::sync::Arc;

use auth::middleware::AuthenticatedUser;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

use crate::application::create_ad::CreateAdUseCase;
use crate::domain::repository::AdRepository;
use crate::error::{MarketplaceError, MarketplaceResult};
use crate::presentation::dto::{AdResponse, CreateAdRequest};

/// Shared state for marketplace handlers
#[derive(Clone)]
pub struct MarketplaceAppState<A>
where
    A: AdRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<A>,
}

impl<A> MarketplaceAppState<A>
where
    A: AdRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: A) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// POST /api/create (behind `require_access_token`)
pub async fn create_ad<A>(
    State(state): State<MarketplaceAppState<A>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateAdRequest>, JsonRejection>,
) -> MarketplaceResult<Json<AdResponse>>
where
    A: AdRepository + Clone + Send + Sync + 'static,
{
    // Missing fields and wrong types are a 400 too, not axum's 422
    let Json(req) = payload.map_err(|e| MarketplaceError::InvalidJson(e.body_text()))?;

    let ad = CreateAdUseCase::new(state.repo.clone())
        .execute(user.0, req.into())
        .await?;

    Ok(Json(ad.into()))
}
