//! Create Ad Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Ad;
use crate::domain::repository::AdRepository;
use crate::domain::value_objects::{AdContent, AdTitle, ImageUrl, Price};
use crate::error::MarketplaceResult;

/// Unvalidated ad fields as submitted
#[derive(Debug, Clone)]
pub struct CreateAdInput {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub price: f64,
}

/// Create Ad Use Case
pub struct CreateAdUseCase<A>
where
    A: AdRepository,
{
    ad_repo: Arc<A>,
}

impl<A> CreateAdUseCase<A>
where
    A: AdRepository,
{
    pub fn new(ad_repo: Arc<A>) -> Self {
        Self { ad_repo }
    }

    /// `author` must come from a verified access token
    pub async fn execute(&self, author: UserId, input: CreateAdInput) -> MarketplaceResult<Ad> {
        let ad = Ad::new(
            author,
            AdTitle::new(input.title)?,
            AdContent::new(input.content)?,
            ImageUrl::new(input.image_url)?,
            Price::new(input.price)?,
        );

        self.ad_repo.create_ad(&ad).await?;

        tracing::info!(ad_id = %ad.ad_id, user_id = %author, price = %ad.price, "Ad created");

        Ok(ad)
    }
}
