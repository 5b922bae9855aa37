//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::MarketplaceAppState;
pub use router::{marketplace_router, marketplace_routes};
