//! Login Use Case
//!
//! Authenticates a user by email and password and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::register::SignedInOutput;
use crate::application::session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<SignedInOutput> {
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        };
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        // A malformed email cannot belong to anyone; answer like a wrong password
        let email = Email::new(&email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let candidate = RawPassword::candidate(password);
        if !user.password_hash.verify(&candidate, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = AuthSession::new(user.user_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(SignedInOutput {
            session_token: session_token::issue(&session.session_id, &self.config.session_secret),
            user,
        })
    }
}
