//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use platform::view::SharedRenderer;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Auth router over PostgreSQL
pub fn auth_router(
    repo: Arc<PgAuthRepository>,
    config: Arc<AuthConfig>,
    renderer: SharedRenderer,
) -> Router {
    auth_router_generic(repo, config, renderer)
}

/// Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: Arc<R>, config: Arc<AuthConfig>, renderer: SharedRenderer) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo,
        config,
        renderer,
    };

    Router::new()
        .route(
            "/login",
            get(handlers::login_page::<R>).post(handlers::login::<R>),
        )
        .route("/logout", post(handlers::logout::<R>))
        .route("/signup", post(handlers::sign_up::<R>))
        .with_state(state)
}
