//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAdRepository;
pub use postgres::PgAdRepository;
