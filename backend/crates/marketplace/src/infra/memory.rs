//! In-Memory Repository Implementation
//!
//! Backs tests and database-less development runs.

use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::Mutex;

use crate::domain::entities::Ad;
use crate::domain::repository::AdRepository;
use crate::error::MarketplaceResult;

#[derive(Clone, Default)]
pub struct InMemoryAdRepository {
    ads: Arc<Mutex<Vec<Ad>>>,
}

impl InMemoryAdRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ads of `user_id`, oldest first
    pub async fn ads_by_user(&self, user_id: &UserId) -> Vec<Ad> {
        self.ads
            .lock()
            .await
            .iter()
            .filter(|ad| ad.user_id == *user_id)
            .cloned()
            .collect()
    }
}

impl AdRepository for InMemoryAdRepository {
    async fn create_ad(&self, ad: &Ad) -> MarketplaceResult<()> {
        self.ads.lock().await.push(ad.clone());
        Ok(())
    }
}
