//! User Password Value Object
//!
//! Domain wrappers over `platform::password`. Hashing is Argon2id, clear text is
//! zeroized on drop.
//!
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("MySecurePass123!".to_string()).unwrap();
//! let stored = UserPassword::from_raw(&raw, None).unwrap();
//!
//! let attempt = RawPassword::for_verification("MySecurePass123!".to_string());
//! assert!(stored.verify(&attempt, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (user input)
// ============================================================================

pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate against the signup policy
    ///
    /// Errors carry a user-facing message and a hint.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, actual } => AppError::bad_request(format!(
                "Password must be at least {} characters (got {})",
                min, actual
            ))
            .with_action("Please choose a longer password"),

            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            ))
            .with_action("Please choose a shorter password"),

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any control characters")
            }

            PasswordPolicyError::CommonPattern => {
                AppError::bad_request("Password is too common or follows a predictable pattern")
                    .with_action("Please choose a more unique password")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// A login attempt; no policy, only normalization
    pub fn for_verification(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (hashed, stored)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Unexpected error during password hashing")
            }
        })?;

        Ok(Self(hashed))
    }

    pub fn from_phc_string(s: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(s)
            .map(Self)
            .map_err(|_| AppError::internal("Stored password hash is malformed"))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// `false` on mismatch and on any failure of the hash primitive
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_error_has_action() {
        let err = RawPassword::new("short".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.message().contains("at least 8"));
        assert!(err.action().is_some());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("Tr1cky-Number-Guess".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, Some(b"pepper")).unwrap();

        let good = RawPassword::for_verification("Tr1cky-Number-Guess".to_string());
        let bad = RawPassword::for_verification("tr1cky-number-guess".to_string());
        assert!(stored.verify(&good, Some(b"pepper")));
        assert!(!stored.verify(&bad, Some(b"pepper")));
        assert!(!stored.verify(&good, None));
    }

    #[test]
    fn test_restore_from_phc() {
        let raw = RawPassword::new("Tr1cky-Number-Guess".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();
        let restored = UserPassword::from_phc_string(stored.as_phc_string()).unwrap();
        assert_eq!(restored, stored);

        assert!(UserPassword::from_phc_string("plaintext").is_err());
    }

    #[test]
    fn test_debug_hides_hash() {
        let raw = RawPassword::new("Tr1cky-Number-Guess".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();
        assert!(!format!("{stored:?}").contains("argon2"));
        assert!(!format!("{raw:?}").contains("Tr1cky"));
    }
}
