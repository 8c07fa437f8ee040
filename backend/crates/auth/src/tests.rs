//! Unit tests for auth crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::Duration;
    use kernel::id::UserId;

    use crate::application::session_token;
    use crate::application::{
        CheckSessionUseCase, CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase,
        RegisterInput, RegisterUseCase, SignedInOutput,
    };
    use crate::domain::entity::auth_session::AuthSession;
    use crate::domain::repository::{AuthSessionRepository, UserRepository};
    use crate::domain::value_object::email::Email;
    use crate::error::{AuthError, AuthResult};
    use crate::{AuthConfig, MemoryAuthRepository};

    fn setup() -> (Arc<MemoryAuthRepository>, Arc<AuthConfig>) {
        (
            Arc::new(MemoryAuthRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    async fn register(
        repo: &Arc<MemoryAuthRepository>,
        config: &Arc<AuthConfig>,
        user_name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SignedInOutput> {
        RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(RegisterInput {
                user_name: Some(user_name.to_string()),
                email: Some(email.to_string()),
                password: Some(password.to_string()),
            })
            .await
    }

    async fn login(
        repo: &Arc<MemoryAuthRepository>,
        config: &Arc<AuthConfig>,
        email: &str,
        password: &str,
    ) -> AuthResult<SignedInOutput> {
        LoginUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(LoginInput {
                email: Some(email.to_string()),
                password: Some(password.to_string()),
            })
            .await
    }

    #[tokio::test]
    async fn test_register_normalizes_and_signs_in() {
        let (repo, config) = setup();

        let output = register(&repo, &config, "  ironmike ", "Mike@Gym.com", "uppercut")
            .await
            .unwrap();

        assert_eq!(output.user.user_name.as_str(), "ironmike");
        assert_eq!(output.user.email.as_str(), "mike@gym.com");
        assert_eq!(repo.session_count().await, 1);

        let session_id = session_token::parse(&output.session_token, &config.session_secret)
            .expect("token should verify");
        let session = AuthSessionRepository::find_by_id(repo.as_ref(), &session_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.user_id, output.user.user_id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_or_username_conflicts() {
        let (repo, config) = setup();
        register(&repo, &config, "ironmike", "mike@gym.com", "uppercut")
            .await
            .unwrap();

        let same_email = register(&repo, &config, "someoneelse", "MIKE@gym.com", "uppercut").await;
        assert!(matches!(same_email, Err(AuthError::Conflict)));

        let same_name = register(&repo, &config, "ironmike", "other@gym.com", "uppercut").await;
        assert!(matches!(same_name, Err(AuthError::Conflict)));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let (repo, config) = setup();
        let result = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(RegisterInput {
                user_name: Some("ironmike".into()),
                email: None,
                password: Some("uppercut".into()),
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(ref m)) if m == "Missing required fields"));
    }

    #[tokio::test]
    async fn test_register_validation_happens_before_storage() {
        let (repo, config) = setup();

        let short_name = register(&repo, &config, "ab", "ab@gym.com", "uppercut").await;
        assert!(matches!(short_name, Err(AuthError::Validation(_))));

        let short_password = register(&repo, &config, "abc", "abc@gym.com", "12345").await;
        assert!(
            matches!(short_password, Err(AuthError::Validation(ref m)) if m.contains("at least 6"))
        );

        let bad_email = register(&repo, &config, "abc", "not-an-email", "123456").await;
        assert!(matches!(bad_email, Err(AuthError::Validation(_))));

        let email = Email::new("abc@gym.com").unwrap();
        assert!(repo.find_by_email(&email).await.unwrap().is_none());
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (repo, config) = setup();
        register(&repo, &config, "ironmike", "mike@gym.com", "uppercut")
            .await
            .unwrap();

        let unknown = login(&repo, &config, "nobody@gym.com", "uppercut")
            .await
            .unwrap_err();
        let wrong = login(&repo, &config, "mike@gym.com", "jab-jab")
            .await
            .unwrap_err();
        let malformed = login(&repo, &config, "mike-at-gym", "uppercut")
            .await
            .unwrap_err();

        for err in [&unknown, &wrong, &malformed] {
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid email or password");
            assert_eq!(err.status_code().as_u16(), 401);
        }
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let (repo, config) = setup();
        let registered = register(&repo, &config, "ironmike", "mike@gym.com", "uppercut")
            .await
            .unwrap();

        let output = login(&repo, &config, " MIKE@GYM.COM ", "uppercut")
            .await
            .unwrap();
        assert_eq!(output.user.user_id, registered.user.user_id);
        assert_ne!(output.session_token, registered.session_token);
        assert_eq!(repo.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let (repo, config) = setup();
        let result = LoginUseCase::new(repo.clone(), repo.clone(), config.clone())
            .execute(LoginInput {
                email: Some("mike@gym.com".into()),
                password: None,
            })
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (repo, config) = setup();
        let output = register(&repo, &config, "ironmike", "mike@gym.com", "uppercut")
            .await
            .unwrap();
        let use_case = LogoutUseCase::new(repo.clone(), config.clone());

        use_case.execute(None).await.unwrap();
        use_case.execute(Some("garbage")).await.unwrap();
        assert_eq!(repo.session_count().await, 1);

        use_case.execute(Some(&output.session_token)).await.unwrap();
        assert_eq!(repo.session_count().await, 0);
        use_case.execute(Some(&output.session_token)).await.unwrap();
    }

    #[tokio::test]
    async fn test_current_user() {
        let (repo, config) = setup();
        let output = register(&repo, &config, "ironmike", "mike@gym.com", "uppercut")
            .await
            .unwrap();
        let use_case = CurrentUserUseCase::new(repo.clone(), repo.clone(), config.clone());

        let user = use_case.execute(Some(&output.session_token)).await.unwrap();
        assert_eq!(user.user_id, output.user.user_id);

        assert!(matches!(
            use_case.execute(None).await,
            Err(AuthError::SessionInvalid)
        ));
    }

    #[tokio::test]
    async fn test_current_user_missing_user_destroys_session() {
        let (repo, config) = setup();
        let output = register(&repo, &config, "ironmike", "mike@gym.com", "uppercut")
            .await
            .unwrap();
        repo.remove_user(&output.user.user_id).await;

        let use_case = CurrentUserUseCase::new(repo.clone(), repo.clone(), config.clone());
        let result = use_case.execute(Some(&output.session_token)).await;

        assert!(matches!(result, Err(AuthError::UserNotFound)));
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected_and_removed() {
        let (repo, config) = setup();
        let session = AuthSession::new(UserId::new(), Duration::seconds(-1));
        AuthSessionRepository::create(repo.as_ref(), &session)
            .await
            .unwrap();
        let token = session_token::issue(&session.session_id, &config.session_secret);

        let use_case = CheckSessionUseCase::new(repo.clone(), config.clone());
        assert!(!use_case.is_valid(Some(&token)).await);
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_session_lookup_returns_expired_rows() {
        let (repo, _config) = setup();
        let session = AuthSession::new(UserId::new(), Duration::seconds(-1));
        AuthSessionRepository::create(repo.as_ref(), &session)
            .await
            .unwrap();

        // Expiry is judged by the caller, which deletes the row
        let found = AuthSessionRepository::find_by_id(repo.as_ref(), &session.session_id)
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_expired());
        assert_eq!(found.session_id, session.session_id);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let (repo, config) = setup();
        let output = register(&repo, &config, "ironmike", "mike@gym.com", "uppercut")
            .await
            .unwrap();

        let other = Arc::new(AuthConfig::development());
        let use_case = CheckSessionUseCase::new(repo.clone(), other);
        assert!(!use_case.is_valid(Some(&output.session_token)).await);
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let (repo, _config) = setup();
        let live = AuthSession::new(UserId::new(), Duration::days(7));
        let dead = AuthSession::new(UserId::new(), Duration::seconds(-10));
        AuthSessionRepository::create(repo.as_ref(), &live).await.unwrap();
        AuthSessionRepository::create(repo.as_ref(), &dead).await.unwrap();

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert_eq!(repo.session_count().await, 1);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::middleware::{AuthMiddlewareState, AuthenticatedUser, require_auth_session};
    use crate::{AuthConfig, MemoryAuthRepository, auth_router_generic};

    fn app() -> Router {
        let repo = Arc::new(MemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());

        let protected = Router::new()
            .route(
                "/whoami",
                get(|Extension(user): Extension<AuthenticatedUser>| async move {
                    user.user_id.to_string()
                }),
            )
            .route_layer(middleware::from_fn_with_state(
                AuthMiddlewareState {
                    repo: repo.clone(),
                    config: config.clone(),
                },
                require_auth_session::<MemoryAuthRepository>,
            ));

        Router::new()
            .nest("/auth", auth_router_generic(repo, config))
            .merge(protected)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// `name=value` part of a Set-Cookie header
    fn session_cookie(response: &axum::response::Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_then_me() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/auth/register",
                json!({"username": "ironmike", "email": "mike@gym.com", "password": "uppercut"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let cookie = session_cookie(&response);
        assert!(cookie.starts_with("mma.sid="));

        let body = body_json(response).await;
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["user"]["username"], "ironmike");
        assert!(body["user"].get("password").is_none());
        assert!(body["user"].get("passwordHash").is_none());

        let response = app
            .clone()
            .oneshot(get_with_cookie("/auth/me", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let me = body_json(response).await;
        assert_eq!(me["user"]["email"], "mike@gym.com");

        let response = app
            .oneshot(get_with_cookie("/auth/check", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({"authenticated": true}));
    }

    #[tokio::test]
    async fn test_check_without_cookie() {
        let response = app()
            .oneshot(get_with_cookie("/auth/check", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"authenticated": false}));
    }

    #[tokio::test]
    async fn test_me_without_session_is_401() {
        let response = app()
            .oneshot(get_with_cookie("/auth/me", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Not authenticated");
    }

    #[tokio::test]
    async fn test_register_missing_field_is_400() {
        let response = app()
            .oneshot(post_json(
                "/auth/register",
                json!({"username": "ironmike", "password": "uppercut"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_register_is_409_and_bad_login_is_401() {
        let app = app();
        let register = json!({"username": "ironmike", "email": "mike@gym.com", "password": "uppercut"});

        let first = app
            .clone()
            .oneshot(post_json("/auth/register", register.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .clone()
            .oneshot(post_json("/auth/register", register))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(second).await["error"],
            "User with this email or username already exists"
        );

        let login = app
            .oneshot(post_json(
                "/auth/login",
                json!({"email": "mike@gym.com", "password": "wrong-pass"}),
            ))
            .await
            .unwrap();
        assert_eq!(login.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(login).await["error"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_and_session() {
        let app = app();
        let response = app
            .clone()
            .oneshot(post_json(
                "/auth/register",
                json!({"username": "ironmike", "email": "mike@gym.com", "password": "uppercut"}),
            ))
            .await
            .unwrap();
        let cookie = session_cookie(&response);

        let logout = Request::builder()
            .method("POST")
            .uri("/auth/logout")
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(logout).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cleared = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cleared.contains("Max-Age=0"));
        assert_eq!(body_json(response).await["message"], "Logout successful");

        let response = app
            .oneshot(get_with_cookie("/auth/check", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({"authenticated": false}));
    }

    #[tokio::test]
    async fn test_middleware_rejects_and_admits() {
        let app = app();

        let response = app
            .clone()
            .oneshot(get_with_cookie("/whoami", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(get_with_cookie("/whoami", Some("mma.sid=forged.token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(post_json(
                "/auth/register",
                json!({"username": "ironmike", "email": "mike@gym.com", "password": "uppercut"}),
            ))
            .await
            .unwrap();
        let cookie = session_cookie(&response);
        let user_id = body_json(response).await["user"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(get_with_cookie("/whoami", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), user_id);
    }
}
