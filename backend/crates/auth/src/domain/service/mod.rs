//! Domain Services

pub mod token_codec;

pub use token_codec::{AccessClaims, RefreshClaims, TokenCodec, TokenError};
