//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the auth guard.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthGuard, require_user};
pub use router::{auth_router, auth_router_generic};
