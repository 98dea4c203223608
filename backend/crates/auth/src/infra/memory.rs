//! In-memory repository
//!
//! Same contract as [`PgAuthRepository`](super::postgres::PgAuthRepository), backed by
//! hash maps. Used by tests and for running the server without a database.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    sessions: Arc<RwLock<HashMap<Uuid, AuthSession>>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop a user but leave their sessions behind, the way a session row
    /// can outlive its user between lookups
    pub async fn remove_user(&self, user_id: &UserId) -> bool {
        self.users.write().await.remove(user_id.as_uuid()).is_some()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| &u.user_name == user_name))
    }
}

impl AuthSessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self
            .sessions
            .read()
            .await
            .get(&session_id)
            .filter(|s| !s.is_expired())
            .cloned())
    }

    async fn touch(&self, session_id: Uuid) -> AuthResult<()> {
        if let Some(session) = self.sessions.write().await.get_mut(&session_id) {
            session.touch();
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at_ms > now_ms);
        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::{RawPassword, UserPassword};
    use chrono::Duration;

    fn user(name: &str) -> User {
        let raw = RawPassword::for_verification("irrelevant".to_string());
        let hash = UserPassword::from_raw(&raw, None).unwrap();
        User::new(UserName::new(name).unwrap(), hash)
    }

    #[test]
    fn test_duplicate_user_name_rejected() {
        tokio_test::block_on(async {
            let repo = InMemoryAuthRepository::new();
            UserRepository::create(&repo, &user("alice")).await.unwrap();

            let err = UserRepository::create(&repo, &user("alice")).await.unwrap_err();
            assert!(matches!(err, AuthError::UserNameTaken));

            // case-sensitive: a different account
            UserRepository::create(&repo, &user("Alice")).await.unwrap();
        });
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let repo = InMemoryAuthRepository::new();
        let alice = user("alice");
        UserRepository::create(&repo, &alice).await.unwrap();

        let found = repo
            .find_by_user_name(&UserName::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, alice.user_id);

        assert!(
            repo.find_by_user_name(&UserName::new("ALICE").unwrap())
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            UserRepository::find_by_id(&repo, &alice.user_id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_expired_sessions_hidden_and_cleaned() {
        let repo = InMemoryAuthRepository::new();
        let live = AuthSession::new(UserId::new(), Duration::hours(1));
        let dead = AuthSession::new(UserId::new(), Duration::seconds(-5));
        AuthSessionRepository::create(&repo, &live).await.unwrap();
        AuthSessionRepository::create(&repo, &dead).await.unwrap();

        assert!(
            AuthSessionRepository::find_by_id(&repo, live.session_id)
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            AuthSessionRepository::find_by_id(&repo, dead.session_id)
                .await
                .unwrap()
                .is_none()
        );

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let repo = InMemoryAuthRepository::new();
        let session = AuthSession::new(UserId::new(), Duration::hours(1));
        AuthSessionRepository::create(&repo, &session).await.unwrap();
        repo.delete(session.session_id).await.unwrap();
        assert_eq!(repo.session_count().await, 0);
    }
}
