//! Game (Number Guessing) Module
//!
//! Clean Architecture structure:
//! - `domain/` - round state machine, game records, repository traits
//! - `application/` - start / guess / history / detail use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, all behind the auth guard
//!
//! ## Round model
//! - Round state lives server-side, keyed by the player's auth session
//! - The game record is created on the first guess and updated on every guess
//!   before the response is sent
//! - A record is complete exactly when one of its guesses hits the secret

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::GameConfig;
pub use error::{GameError, GameResult};
pub use infra::{InMemoryGameRepository, PgGameRepository};
pub use presentation::router::{game_router, game_router_generic};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::repository::{
        GameRecordRepository, RoundStateRepository, UpsertOutcome,
    };
    pub use crate::infra::memory::InMemoryGameRepository as MemoryGameStore;
    pub use crate::infra::postgres::PgGameRepository as GameStore;
}
