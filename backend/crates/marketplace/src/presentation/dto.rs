//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::AdId;
use serde::{Deserialize, Serialize};

use crate::application::create_ad::CreateAdInput;
use crate::domain::entities::Ad;

/// Create ad request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    pub price: f64,
}

impl From<CreateAdRequest> for CreateAdInput {
    fn from(req: CreateAdRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            image_url: req.image_url,
            price: req.price,
        }
    }
}

/// Create ad response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdResponse {
    pub id: AdId,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.ad_id,
            title: ad.title.as_str().to_owned(),
            content: ad.content.as_str().to_owned(),
            image_url: ad.image_url.as_str().to_owned(),
            price: ad.price.value(),
            created_at: ad.created_at,
        }
    }
}
