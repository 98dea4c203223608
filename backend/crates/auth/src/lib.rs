//! Auth (Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - entities, value objects, repository traits
//! - `application/` - use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - login/logout/signup handlers and the `require_user` guard
//!
//! ## Session model
//! - Passwords hashed with Argon2id
//! - Login opens a server-side session that stores only the user id
//! - The cookie carries `<session id>.<HMAC>`; every guarded request resolves it back
//!   to a [`CurrentUser`], or is redirected to the login page

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::resolve_session::CurrentUser;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository};
pub use presentation::middleware::{AuthGuard, require_user};
pub use presentation::router::{auth_router, auth_router_generic};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::{auth_session::AuthSession, user::User};
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::repository::{AuthSessionRepository, UserRepository};
    pub use crate::infra::memory::InMemoryAuthRepository as MemoryAuthStore;
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
