//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entities::Ad;
use crate::domain::repository::AdRepository;
use crate::error::MarketplaceResult;

/// PostgreSQL-backed ad repository
#[derive(Clone)]
pub struct PgAdRepository {
    pool: PgPool,
}

impl PgAdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AdRepository for PgAdRepository {
    async fn create_ad(&self, ad: &Ad) -> MarketplaceResult<()> {
        // `ads_user_id_fkey` ties the row to a registered user
        sqlx::query(
            r#"
            INSERT INTO ads (
                ad_id,
                user_id,
                title,
                content,
                image_url,
                price,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(ad.ad_id.as_uuid())
        .bind(ad.user_id.as_uuid())
        .bind(ad.title.as_str())
        .bind(ad.content.as_str())
        .bind(ad.image_url.as_str())
        .bind(ad.price.value())
        .bind(ad.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
