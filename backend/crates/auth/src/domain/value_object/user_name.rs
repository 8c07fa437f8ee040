//! User Name Value Object
//!
//! Display handle, unique across all users.
//!
//! ## Invariants
//! - Stored with surrounding whitespace trimmed
//! - Length: 3..=50 characters after trimming, counted in code points

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = raw.as_ref().trim();
        let len = trimmed.chars().count();

        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&len) {
            return Err(AppError::bad_request(format!(
                "Username must be between {} and {} characters",
                USER_NAME_MIN_LENGTH, USER_NAME_MAX_LENGTH
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AppError::bad_request(
                "Username cannot contain control characters",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        let name = UserName::new("  ironmike ").unwrap();
        assert_eq!(name.as_str(), "ironmike");
    }

    #[test]
    fn test_length_bounds() {
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("  ab  ").is_err());
        assert!(UserName::new("abc").is_ok());
        assert!(UserName::new("a".repeat(50)).is_ok());
        assert!(UserName::new("a".repeat(51)).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(UserName::new("柔術家").is_ok());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(UserName::new("bad\u{0007}name").is_err());
    }
}
