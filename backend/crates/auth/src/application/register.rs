//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input. Fields are optional so a missing field is a validation
/// error rather than a body rejection.
pub struct RegisterInput {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Output of a successful register or login
#[derive(Debug)]
pub struct SignedInOutput {
    pub user: User,
    /// Signed value for the session cookie
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<SignedInOutput> {
        let (Some(user_name), Some(email), Some(password)) =
            (input.user_name, input.email, input.password)
        else {
            return Err(AuthError::Validation("Missing required fields".to_string()));
        };
        if user_name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation("Missing required fields".to_string()));
        }

        // Validate before touching storage
        let user_name = UserName::new(&user_name)?;
        let raw_password = RawPassword::new(password)?;
        let email = Email::new(&email)?;

        if self
            .user_repo
            .exists_by_user_name_or_email(&user_name, &email)
            .await?
        {
            return Err(AuthError::Conflict);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(user_name, email, password_hash);

        // Unique constraints still apply here if a concurrent registration won
        self.user_repo.create(&user).await?;

        let session = AuthSession::new(user.user_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(SignedInOutput {
            session_token: session_token::issue(&session.session_id, &self.config.session_secret),
            user,
        })
    }
}
