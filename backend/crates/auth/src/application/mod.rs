//! Application Layer
//!
//! Use cases and the engine facade.

pub mod check_access;
pub mod config;
pub mod engine;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod verify_credentials;

// Re-exports
pub use check_access::CheckAccessUseCase;
pub use config::AuthConfig;
pub use engine::AuthEngine;
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
pub use refresh::RefreshUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use verify_credentials::VerifyCredentialsUseCase;
