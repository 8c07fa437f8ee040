//! Logout Use Case
//!
//! Destroys the server-side session. Idempotent.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

pub struct LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session behind `session_token`, if any.
    ///
    /// Missing, forged and already-deleted sessions all succeed.
    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<()> {
        let Some(session_id) = session_token
            .and_then(|token| session_token::parse(token, &self.config.session_secret))
        else {
            return Ok(());
        };

        self.session_repo.delete(&session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");

        Ok(())
    }
}
