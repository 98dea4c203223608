//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate holds the vocabulary every other crate agrees on:
//! - The unified error type and result alias
//! - Typed UUID identifiers (users, games)
//!
//! **Design Principle**: only things whose meaning is the same in the auth
//! and game domains belong here.

pub mod error {
    pub mod app_error;
    pub mod kind;
    #[cfg(feature = "axum")]
    pub mod response;
}
pub mod id;
