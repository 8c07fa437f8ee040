//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{SessionId, UserId};

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user.
    ///
    /// Returns [`crate::error::AuthError::Conflict`] when the user name or
    /// email is already taken, including when a concurrent registration wins.
    async fn create(&self, user: &User) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if either the user name or the email is already registered
    async fn exists_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<bool>;
}

/// Session store
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find a session by ID. Expired sessions are still returned so the
    /// caller can delete them.
    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>>;

    /// Delete a session. Deleting an unknown session is not an error.
    async fn delete(&self, session_id: &SessionId) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
