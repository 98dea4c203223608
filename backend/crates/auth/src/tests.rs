//! Use case tests for the auth crate, run against the in-memory repository

#[cfg(test)]
mod sign_in_tests {
    use std::sync::Arc;

    use crate::application::{
        AuthConfig, ResolveSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase,
        SignUpInput, SignUpUseCase, session_token,
    };
    use crate::domain::entity::user::User;
    use crate::domain::repository::{AuthSessionRepository, UserRepository};
    use crate::domain::value_object::{UserId, user_name::UserName};
    use crate::error::{AuthError, AuthResult};
    use crate::infra::memory::InMemoryAuthRepository;

    const PASSWORD: &str = "Seven-is-my-number";

    fn setup() -> (Arc<InMemoryAuthRepository>, Arc<AuthConfig>) {
        let config = AuthConfig {
            password_pepper: Some(b"test-pepper".to_vec()),
            ..AuthConfig::development()
        };
        (Arc::new(InMemoryAuthRepository::new()), Arc::new(config))
    }

    async fn register(repo: &Arc<InMemoryAuthRepository>, config: &Arc<AuthConfig>, name: &str) {
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                user_name: name.to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();
    }

    /// User store whose every call fails
    struct UnreachableUsers;

    impl UserRepository for UnreachableUsers {
        async fn create(&self, _user: &User) -> AuthResult<()> {
            Err(AuthError::Internal("user store unreachable".to_string()))
        }

        async fn find_by_id(&self, _user_id: &UserId) -> AuthResult<Option<User>> {
            Err(AuthError::Internal("user store unreachable".to_string()))
        }

        async fn find_by_user_name(&self, _user_name: &UserName) -> AuthResult<Option<User>> {
            Err(AuthError::Internal("user store unreachable".to_string()))
        }

        async fn exists_by_user_name(&self, _user_name: &UserName) -> AuthResult<bool> {
            Err(AuthError::Internal("user store unreachable".to_string()))
        }
    }

    fn sign_in(
        repo: &Arc<InMemoryAuthRepository>,
        config: &Arc<AuthConfig>,
    ) -> SignInUseCase<InMemoryAuthRepository, InMemoryAuthRepository> {
        SignInUseCase::new(repo.clone(), repo.clone(), config.clone())
    }

    #[tokio::test]
    async fn test_sign_in_success_binds_user_id() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;

        let output = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user_name, "alice");
        let session_id = session_token::verify(&output.session_token, &config.session_secret)
            .expect("token must be signed with the configured secret");
        let session = AuthSessionRepository::find_by_id(repo.as_ref(), session_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.user_id, output.user_id);
    }

    #[tokio::test]
    async fn test_unknown_user_message() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;

        let err = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "bob".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .err()
            .unwrap();

        assert!(matches!(err, AuthError::UnknownUser(ref name) if name == "bob"));
        assert_eq!(err.to_string(), "Unknown user bob");
    }

    #[tokio::test]
    async fn test_user_name_lookup_is_case_sensitive() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;

        let err = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "Alice".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::UnknownUser(_)));
    }

    #[tokio::test]
    async fn test_padded_name_is_not_trimmed_at_login() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;

        for typed in [" alice", "alice ", "\talice"] {
            let err = sign_in(&repo, &config)
                .execute(SignInInput {
                    user_name: typed.to_string(),
                    password: PASSWORD.to_string(),
                })
                .await
                .err()
                .unwrap();
            assert_eq!(err.to_string(), format!("Unknown user {typed}"));
        }
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_malformed_name_is_unknown_user() {
        let (repo, config) = setup();
        let err = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "x".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Unknown user x");
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;

        let err = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: "not-the-password".to_string(),
            })
            .await
            .err()
            .unwrap();

        assert!(matches!(err, AuthError::InvalidPassword));
        assert_eq!(err.to_string(), "Invalid password");
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_pepper_change_fails_closed() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;

        let other = Arc::new(AuthConfig {
            password_pepper: Some(b"rotated".to_vec()),
            ..(*config).clone()
        });
        let err = sign_in(&repo, &other)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::InvalidPassword));
    }

    #[tokio::test]
    async fn test_resolve_round_trip_and_sign_out() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;
        let output = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();

        let resolver = ResolveSessionUseCase::new(repo.clone(), repo.clone(), config.clone());
        let user = resolver.resolve(&output.session_token).await.unwrap();
        assert_eq!(user.user_id, output.user_id);
        assert_eq!(user.user_name, "alice");

        SignOutUseCase::new(repo.clone(), config.clone())
            .execute(&output.session_token)
            .await
            .unwrap();
        assert!(resolver.resolve(&output.session_token).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_rejects_garbage_and_foreign_tokens() {
        let (repo, config) = setup();
        let resolver = ResolveSessionUseCase::new(repo.clone(), repo.clone(), config.clone());

        assert!(resolver.resolve("").await.is_none());
        assert!(resolver.resolve("nonsense").await.is_none());

        // well-signed, but no such session
        let orphan = session_token::sign(uuid::Uuid::new_v4(), &config.session_secret);
        assert!(resolver.resolve(&orphan).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_fails_once_user_is_gone() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;
        let output = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();

        let resolver = ResolveSessionUseCase::new(repo.clone(), repo.clone(), config.clone());
        assert!(resolver.resolve(&output.session_token).await.is_some());

        assert!(repo.remove_user(&output.user_id).await);
        assert!(resolver.resolve(&output.session_token).await.is_none());
        // the session row itself is untouched
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_resolve_fails_when_user_store_errors() {
        let (repo, config) = setup();
        register(&repo, &config, "alice").await;
        let output = sign_in(&repo, &config)
            .execute(SignInInput {
                user_name: "alice".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();

        let resolver =
            ResolveSessionUseCase::new(Arc::new(UnreachableUsers), repo.clone(), config.clone());
        assert!(resolver.resolve(&output.session_token).await.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_with_bad_token() {
        let (repo, config) = setup();
        let err = SignOutUseCase::new(repo, config)
            .execute("bad.token")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
    }
}

#[cfg(test)]
mod sign_up_tests {
    use std::sync::Arc;

    use crate::application::{AuthConfig, SignUpInput, SignUpUseCase};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::user_name::UserName;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryAuthRepository;

    fn use_case() -> (SignUpUseCase<InMemoryAuthRepository>, Arc<InMemoryAuthRepository>) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        (
            SignUpUseCase::new(repo.clone(), Arc::new(AuthConfig::development())),
            repo,
        )
    }

    fn input(name: &str, password: &str) -> SignUpInput {
        SignUpInput {
            user_name: name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_stores_hash_not_password() {
        let (use_case, repo) = use_case();
        let output = use_case
            .execute(input("carol", "Lucky-Number-Seven"))
            .await
            .unwrap();

        let user = repo
            .find_by_user_name(&UserName::new("carol").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.user_id, output.user_id);
        assert!(user.password_hash.as_phc_string().starts_with("$argon2id$"));
        assert!(!user.password_hash.as_phc_string().contains("Lucky"));
    }

    #[tokio::test]
    async fn test_duplicate_name() {
        let (use_case, _) = use_case();
        use_case
            .execute(input("carol", "Lucky-Number-Seven"))
            .await
            .unwrap();
        let err = use_case
            .execute(input("carol", "Another-Password-1"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[tokio::test]
    async fn test_invalid_name_and_weak_password() {
        let (use_case, _) = use_case();

        let err = use_case
            .execute(input("a b", "Lucky-Number-Seven"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::InvalidUserName(_)));

        let err = use_case
            .execute(input("dave", "password"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AuthError::PasswordValidation(_)));
    }
}
