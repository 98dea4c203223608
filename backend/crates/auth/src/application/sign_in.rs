//! Sign In Use Case
//!
//! Verifies credentials and opens a server-side session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{UserId, user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

pub struct SignInOutput {
    /// Cookie value
    pub session_token: String,
    pub user_id: UserId,
    pub user_name: String,
}

pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
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

    /// Unknown name -> `UnknownUser`, wrong password -> `InvalidPassword`
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // the name must match exactly; padding is not forgiven at login
        let user_name = match UserName::new(&input.user_name) {
            Ok(name) if name.as_str() == input.user_name => name,
            _ => return Err(AuthError::UnknownUser(input.user_name)),
        };

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::UnknownUser(input.user_name))?;

        let attempt = RawPassword::for_verification(input.password);
        if !user.password_hash.verify(&attempt, self.config.pepper()) {
            return Err(AuthError::InvalidPassword);
        }

        // only the user id is bound into the session
        let session = AuthSession::new(user.user_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token: session_token::sign(session.session_id, &self.config.session_secret),
            user_id: user.user_id,
            user_name: user.user_name.into_inner(),
        })
    }
}
