//! Entity Module

pub mod session;
pub mod token_pair;
pub mod user;
