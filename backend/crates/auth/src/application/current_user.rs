//! Current User Use Case
//!
//! Returns the user behind the session cookie.

use std::sync::Arc;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> CurrentUserUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<User> {
        let token = session_token.ok_or(AuthError::SessionInvalid)?;

        let session = CheckSessionUseCase::new(self.session_repo.clone(), self.config.clone())
            .get_session(token)
            .await?;

        match self.user_repo.find_by_id(&session.user_id).await? {
            Some(user) => Ok(user),
            None => {
                // Dangling session: the owner is gone
                self.session_repo.delete(&session.session_id).await?;
                tracing::warn!(
                    user_id = %session.user_id,
                    session_id = %session.session_id,
                    "Session referenced a missing user; session destroyed"
                );
                Err(AuthError::UserNotFound)
            }
        }
    }
}
