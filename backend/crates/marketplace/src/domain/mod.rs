//! Domain Layer
//!
//! This layer contains:
//! - Domain entities (Ad)
//! - Domain value objects (AdTitle, AdContent, ImageUrl, Price)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::Ad;
pub use repository::AdRepository;
pub use value_objects::{AdContent, AdTitle, AdValidationError, ImageUrl, Price};
