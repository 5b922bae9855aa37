//! Value Object Module

pub mod login;
pub mod password;

pub use kernel::id::{AccessTokenId, SessionId, UserId};
pub use login::{Login, LoginError};
pub use password::{PasswordHash, RawPassword};
