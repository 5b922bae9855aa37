//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{AdId, UserId};

use super::value_objects::{AdContent, AdTitle, ImageUrl, Price};

/// Published advertisement
#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    pub ad_id: AdId,
    /// Author, taken from the verified access token
    pub user_id: UserId,
    pub title: AdTitle,
    pub content: AdContent,
    pub image_url: ImageUrl,
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

impl Ad {
    pub fn new(
        user_id: UserId,
        title: AdTitle,
        content: AdContent,
        image_url: ImageUrl,
        price: Price,
    ) -> Self {
        Self {
            ad_id: AdId::new(),
            user_id,
            title,
            content,
            image_url,
            price,
            created_at: Utc::now(),
        }
    }
}
