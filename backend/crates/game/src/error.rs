//! Game Error Types
//!
//! Game-specific error variants that convert into the unified
//! `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// Guess text is not a base-10 integer
    #[error("Invalid guess: {0:?} is not a number")]
    InvalidGuess(String),

    #[error("No round in progress")]
    NoActiveRound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::InvalidGuess(_) => StatusCode::BAD_REQUEST,
            GameError::NoActiveRound => StatusCode::CONFLICT,
            GameError::Database(_) | GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidGuess(_) => ErrorKind::BadRequest,
            GameError::NoActiveRound => ErrorKind::Conflict,
            GameError::Database(_) | GameError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            GameError::Database(_) => AppError::internal("Database error"),
            GameError::InvalidGuess(_) => AppError::new(self.kind(), self.to_string())
                .with_action("Enter a whole number between 1 and 10"),
            GameError::NoActiveRound => {
                AppError::new(self.kind(), self.to_string()).with_action("Start a new round")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    pub(crate) fn log(&self) {
        match self {
            GameError::Database(e) => {
                tracing::error!(error = %e, "Game database error");
            }
            GameError::Internal(msg) => {
                tracing::error!(message = %msg, "Game internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Game error");
            }
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        err.to_app_error().with_source(err)
    }
}
