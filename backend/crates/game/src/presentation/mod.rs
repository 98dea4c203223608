//! Presentation Layer
//!
//! HTTP handlers, form payloads and view models.

pub mod dto;
pub mod handlers;
pub mod router;
