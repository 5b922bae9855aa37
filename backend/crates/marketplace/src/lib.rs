//! Marketplace Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Ad entity, validated fields, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every route sits behind the auth crate's access-token middleware; the
//! author of an ad is always the verified token holder, never a field of
//! the request body.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::create_ad::{CreateAdInput, CreateAdUseCase};
pub use error::{MarketplaceError, MarketplaceResult};
pub use infra::{memory::InMemoryAdRepository, postgres::PgAdRepository};
pub use presentation::router::{marketplace_router, marketplace_routes};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
