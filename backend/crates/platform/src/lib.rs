//! Platform Crate - Technical Infrastructure
//!
//! Building blocks shared by the auth and game crates that carry no domain meaning:
//! - Password hashing (Argon2id, NIST SP 800-63B policy)
//! - Token signing (SHA-256, HMAC-SHA256, Base64)
//! - Cookie helpers
//! - View rendering

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod view;
