//! Application Layer - Use Cases

pub mod create_ad;

pub use create_ad::{CreateAdInput, CreateAdUseCase};
