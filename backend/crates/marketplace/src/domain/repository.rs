//! Repository Traits

use crate::domain::entities::Ad;
use crate::error::MarketplaceResult;

/// Ad store
#[trait_variant::make(AdRepository: Send)]
pub trait LocalAdRepository {
    async fn create_ad(&self, ad: &Ad) -> MarketplaceResult<()>;
}
