//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - The unified error type and its HTTP classification
//! - Typed identifiers
//!
//! Nothing in here knows about tokens, sessions or passwords.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
