//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors are the crates'
//! own error types.

mod config;

use std::sync::Arc;

use auth::{AuthGuard, PgAuthRepository, auth_router};
use auth::store::AuthSessionRepository;
use axum::Router;
use game::{PgGameRepository, game_router};
use platform::view::HtmlRenderer;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,game=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_store = Arc::new(PgAuthRepository::new(pool.clone()));

    // expired sessions must not block startup
    if let Err(e) = auth_store.cleanup_expired().await {
        tracing::warn!(
            error = %e,
            "Auth session cleanup failed, continuing anyway"
        );
    }

    let auth_config = Arc::new(config.auth);
    let renderer = HtmlRenderer::shared();
    let guard = AuthGuard::new(auth_store.clone(), auth_config.clone());
    let game_store = Arc::new(PgGameRepository::new(pool));

    let app = Router::new()
        .merge(auth_router(auth_store, auth_config, renderer.clone()))
        .merge(game_router(
            game_store,
            guard,
            Arc::new(config.game),
            renderer,
        ))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
