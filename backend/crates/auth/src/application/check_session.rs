//! Check Session Use Case
//!
//! Resolves a session cookie value to a live session.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// `true` when the token maps to a live session. Never fails.
    pub async fn is_valid(&self, session_token: Option<&str>) -> bool {
        self.resolve_user(session_token).await.is_some()
    }

    /// Owner of the session, or `None` for any unauthenticated request.
    ///
    /// Storage failures are logged and treated as unauthenticated.
    pub async fn resolve_user(&self, session_token: Option<&str>) -> Option<UserId> {
        let token = session_token?;
        match self.get_session(token).await {
            Ok(session) => Some(session.user_id),
            Err(AuthError::SessionInvalid) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed");
                None
            }
        }
    }

    /// Get the live session for a token. Expired sessions are deleted.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<AuthSession> {
        let session_id = session_token::parse(session_token, &self.config.session_secret)
            .ok_or(AuthError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_id(&session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(&session_id).await?;
            tracing::debug!(session_id = %session_id, "Removed expired session");
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
