//! HTTP Handlers

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use platform::cookie::extract_cookie;
use platform::view::{SharedRenderer, found, render_view, render_view_with_status};

use crate::application::config::AuthConfig;
use crate::application::{
    SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::presentation::dto::{LoginForm, LoginView, SignUpForm};

pub const LOGIN_VIEW: &str = "login";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub renderer: SharedRenderer,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    fn login_view(&self, message: Option<String>) -> LoginView {
        LoginView {
            title: self.config.app_title.clone(),
            message,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    render_view(state.renderer.as_ref(), LOGIN_VIEW, &state.login_view(None))
}

/// POST /login
///
/// Success sets the session cookie and sends the player to `/`. A rejected
/// credential re-renders the login page with the reason.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignInInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let Some(cookie) = state
                .config
                .session_cookie()
                .set_cookie_header(&output.session_token)
            else {
                tracing::error!("Session token is not a valid cookie value");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            };

            let mut response = found("/");
            response.headers_mut().insert(header::SET_COOKIE, cookie);
            response
        }
        Err(e) if e.is_credential_rejection() => {
            e.log();
            render_view_with_status(
                state.renderer.as_ref(),
                StatusCode::UNAUTHORIZED,
                LOGIN_VIEW,
                &state.login_view(Some(e.to_string())),
            )
        }
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// POST /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // the cookie is cleared either way
        if let Err(e) = use_case.execute(&token).await {
            tracing::debug!(error = %e, "Sign out without a live session");
        }
    }

    let mut response = found(&state.config.login_path);
    if let Some(clear) = state.config.session_cookie().delete_cookie_header() {
        response.headers_mut().insert(header::SET_COOKIE, clear);
    }
    response
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<SignUpForm>,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(_) => found(&state.config.login_path),
        Err(e) => e.into_response(),
    }
}
