//! Auth Error Types
//!
//! Auth-specific variants, mapped onto the unified `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No account with this exact user name
    #[error("Unknown user {0}")]
    UnknownUser(String),

    /// Account exists, password does not match
    #[error("Invalid password")]
    InvalidPassword,

    #[error("User name already exists")]
    UserNameTaken,

    #[error("Invalid user name: {0}")]
    InvalidUserName(String),

    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Token unsigned, tampered, expired, or its session is gone
    #[error("Session not found or expired")]
    SessionInvalid,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UnknownUser(_) | AuthError::InvalidPassword | AuthError::SessionInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::UserNameTaken => StatusCode::CONFLICT,
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UnknownUser(_) | AuthError::InvalidPassword | AuthError::SessionInvalid => {
                ErrorKind::Unauthorized
            }
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Credential rejections are shown to the user on the login page
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, AuthError::UnknownUser(_) | AuthError::InvalidPassword)
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            // never leak driver details to the client
            AuthError::Database(_) => AppError::internal("Database error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UnknownUser(name) => {
                tracing::warn!(user_name = %name, "Login attempt for unknown user");
            }
            AuthError::InvalidPassword => {
                tracing::warn!("Login attempt with invalid password");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error().with_source(err)
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
