//! Auth Guard
//!
//! One middleware in front of every gated route. Requests without a resolvable
//! session are redirected to the login page and never reach the handler.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use platform::cookie::extract_cookie;
use platform::view::found;

use crate::application::config::AuthConfig;
use crate::application::{CurrentUser, ResolveSessionUseCase};
use crate::domain::repository::{AuthSessionRepository, UserRepository};

/// Middleware state
///
/// ```rust,ignore
/// let gated = Router::new()
///     .route("/", get(index))
///     .route_layer(axum::middleware::from_fn_with_state(guard, require_user::<R>));
/// ```
#[derive(Clone)]
pub struct AuthGuard<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthGuard<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn current_user(&self, headers: &HeaderMap) -> Option<CurrentUser> {
        let token = extract_cookie(headers, &self.config.session_cookie_name)?;
        ResolveSessionUseCase::new(self.repo.clone(), self.repo.clone(), self.config.clone())
            .resolve(&token)
            .await
    }
}

/// Resolve the session cookie; insert [`CurrentUser`] or redirect to login
pub async fn require_user<R>(
    State(guard): State<AuthGuard<R>>,
    mut request: Request,
    next: Next,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    match guard.current_user(request.headers()).await {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            tracing::debug!(path = %request.uri().path(), "Unauthenticated request redirected");
            found(&guard.config.login_path)
        }
    }
}
