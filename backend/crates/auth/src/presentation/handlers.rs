//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase,
    RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, MessageResponse, RegisterRequest,
    SessionStatusResponse, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(reject_body)?;

    let use_case =
        RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            user_name: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            message: "User registered successfully",
            user: UserResponse::from(&output.user),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(reject_body)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            message: "Login successful",
            user: UserResponse::from(&output.user),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config);

    let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
    // The cookie is cleared regardless; a stale row expires on its own
    if let Err(e) = use_case.execute(token.as_deref()).await {
        tracing::warn!(error = %e, "Failed to delete session on logout");
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logout successful",
        }),
    )
}

// ============================================================================
// Current user / session status
// ============================================================================

/// GET /api/auth/me
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<CurrentUserResponse>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config);

    let use_case =
        CurrentUserUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let user = use_case.execute(token.as_deref()).await?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(&user),
    }))
}

/// GET /api/auth/check
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config);

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    Json(SessionStatusResponse {
        authenticated: use_case.is_valid(token.as_deref()).await,
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn extract_session_cookie(headers: &HeaderMap, config: &AuthConfig) -> Option<String> {
    platform::cookie::extract_cookie(headers, &config.session_cookie_name)
}

fn reject_body(rejection: JsonRejection) -> AuthError {
    tracing::debug!(error = %rejection, "Rejected auth request body");
    AuthError::Validation("Invalid request body".to_string())
}
