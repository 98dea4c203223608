//! Resolve Session Use Case
//!
//! Turns a cookie value back into the signed-in user. Never an error: anything
//! that goes wrong means "not signed in".

use std::sync::Arc;

use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::UserId;

/// The authenticated user, attached to every guarded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
    pub session_id: Uuid,
}

pub struct ResolveSessionUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> ResolveSessionUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn resolve(&self, token: &str) -> Option<CurrentUser> {
        let Some(session_id) = session_token::verify(token, &self.config.session_secret) else {
            tracing::debug!("Session token rejected");
            return None;
        };

        let session = match self.session_repo.find_by_id(session_id).await {
            Ok(Some(session)) => session,
            Ok(None) => {
                tracing::debug!(session_id = %session_id, "Session missing or expired");
                return None;
            }
            Err(e) => {
                tracing::warn!(session_id = %session_id, error = %e, "Session lookup failed");
                return None;
            }
        };

        let user = match self.user_repo.find_by_id(&session.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(
                    session_id = %session_id,
                    user_id = %session.user_id,
                    "Session refers to a missing user"
                );
                return None;
            }
            Err(e) => {
                tracing::warn!(user_id = %session.user_id, error = %e, "User lookup failed");
                return None;
            }
        };

        if let Err(e) = self.session_repo.touch(session_id).await {
            tracing::warn!(session_id = %session_id, error = %e, "Failed to update session activity");
        }

        Some(CurrentUser {
            user_id: user.user_id,
            user_name: user.user_name.into_inner(),
            session_id,
        })
    }
}
