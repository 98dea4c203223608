//! Repository Traits
//!
//! Persistence interfaces; implementations live in `infra`.

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::{UserId, user_name::UserName};
use crate::error::AuthResult;
use uuid::Uuid;

#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Fails with `UserNameTaken` if the name is in use
    async fn create(&self, user: &User) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Exact, case-sensitive match
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}

#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Unexpired sessions only
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Record activity on the session
    async fn touch(&self, session_id: Uuid) -> AuthResult<()>;

    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Returns the number of sessions removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
