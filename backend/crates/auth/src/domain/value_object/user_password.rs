//! User Password Value Object
//!
//! Domain wrapper around `platform::password`. Registration goes through the
//! length policy; login candidates do not, so that a policy change never
//! locks out existing accounts.
//!
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("sprawl99".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

/// Raw password from user input. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password (registration)
    pub fn new(raw: String) -> AppResult<Self> {
        ClearTextPassword::new(raw).map(Self).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => AppError::bad_request(format!(
                "Password must be at least {} characters",
                min
            ))
            .with_action("Please choose a longer password"),
            PasswordPolicyError::TooLong { max, .. } => AppError::bad_request(format!(
                "Password must be at most {} characters",
                max
            ))
            .with_action("Please choose a shorter password"),
        })
    }

    /// Wrap a login candidate without applying the policy
    pub fn candidate(raw: String) -> Self {
        Self(ClearTextPassword::unchecked(raw))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&self.0).finish()
    }
}

/// Stored password hash (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        raw.0
            .hash(pepper)
            .map(Self)
            .map_err(|e| AppError::internal("Failed to hash password").with_source(e))
    }

    /// Restore from the database
    pub fn from_db(phc: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(phc)
            .map(Self)
            .map_err(|e| AppError::internal("Stored password hash is corrupt").with_source(e))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected_with_message() {
        let err = RawPassword::new("abc".to_string()).unwrap_err();
        assert_eq!(err.message(), "Password must be at least 6 characters");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_candidate_skips_policy() {
        let hashed = UserPassword::from_raw(&RawPassword::new("longenough".into()).unwrap(), None)
            .unwrap();
        assert!(!hashed.verify(&RawPassword::candidate("abc".into()), None));
        assert!(hashed.verify(&RawPassword::candidate("longenough".into()), None));
    }

    #[test]
    fn test_from_db_roundtrip() {
        let raw = RawPassword::new("takedown".into()).unwrap();
        let hashed = UserPassword::from_raw(&raw, Some(b"pepper")).unwrap();
        let restored = UserPassword::from_db(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, Some(b"pepper")));
    }

    #[test]
    fn test_from_db_rejects_garbage() {
        assert!(UserPassword::from_db("plaintext").is_err());
    }
}
