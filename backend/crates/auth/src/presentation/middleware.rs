//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthError;
use crate::presentation::handlers::extract_session_cookie;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// The caller of a protected route. Inserted into request extensions by
/// [`require_auth_session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Authentication status stored in request extensions by
/// [`check_auth_session`]
#[derive(Debug, Clone, Copy)]
pub struct AuthStatus {
    pub user_id: Option<UserId>,
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Middleware that requires a valid auth session
pub async fn require_auth_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(req.headers(), &state.config);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.resolve_user(token.as_deref()).await {
        Some(user_id) => {
            req.extensions_mut().insert(AuthenticatedUser { user_id });
            next.run(req).await
        }
        None => AuthError::SessionInvalid.into_response(),
    }
}

/// Middleware that checks auth session but doesn't require it
pub async fn check_auth_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(req.headers(), &state.config);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let user_id = use_case.resolve_user(token.as_deref()).await;

    req.extensions_mut().insert(AuthStatus { user_id });

    next.run(req).await
}
