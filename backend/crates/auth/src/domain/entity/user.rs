//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{UserId, user_name::UserName, user_password::UserPassword};

/// A player account
///
/// Read-only once created; the game never mutates users.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub user_name: UserName,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
