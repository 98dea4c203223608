//! Game Router

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use auth::{AuthGuard, PgAuthRepository, require_user};
use auth::store::{AuthSessionRepository, UserRepository};
use platform::view::SharedRenderer;

use crate::application::config::GameConfig;
use crate::domain::repository::{GameRecordRepository, RoundStateRepository};
use crate::infra::postgres::PgGameRepository;
use crate::presentation::handlers::{self, GameAppState};

/// Game router over PostgreSQL
pub fn game_router(
    repo: Arc<PgGameRepository>,
    guard: AuthGuard<PgAuthRepository>,
    config: Arc<GameConfig>,
    renderer: SharedRenderer,
) -> Router {
    game_router_generic(repo, guard, config, renderer)
}

/// Game router for any repository implementation
///
/// Every route is gated by `guard`.
pub fn game_router_generic<R, A>(
    repo: Arc<R>,
    guard: AuthGuard<A>,
    config: Arc<GameConfig>,
    renderer: SharedRenderer,
) -> Router
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
    A: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = GameAppState {
        repo,
        config,
        renderer,
    };

    Router::new()
        .route("/", get(handlers::index::<R>))
        .route(handlers::START_PATH, get(handlers::start::<R>))
        .route("/guess", post(handlers::guess::<R>))
        .route("/history", get(handlers::history::<R>))
        .route("/detail", get(handlers::detail::<R>))
        .route(handlers::SUCCESS_PATH, get(handlers::success::<R>))
        .route_layer(middleware::from_fn_with_state(guard, require_user::<A>))
        .with_state(state)
}
