//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-512, random bytes, constant-time compare)
//! - Password wrapping and salted digests
//! - Compact HS512 JSON Web Tokens
//! - Request header extraction

pub mod crypto;
pub mod headers;
pub mod jwt;
pub mod password;
