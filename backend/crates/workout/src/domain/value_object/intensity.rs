//! Intensity Value Object
//!
//! Perceived effort on a 1–10 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

pub const INTENSITY_MIN: i64 = 1;
pub const INTENSITY_MAX: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intensity(i16);

impl Intensity {
    pub fn new(value: i64) -> AppResult<Self> {
        if !(INTENSITY_MIN..=INTENSITY_MAX).contains(&value) {
            return Err(AppError::bad_request(format!(
                "Intensity must be between {} and {}",
                INTENSITY_MIN, INTENSITY_MAX
            )));
        }
        Ok(Self(value as i16))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: i16) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i16 {
        self.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Intensity::new(0).is_err());
        assert!(Intensity::new(11).is_err());
        assert_eq!(Intensity::new(1).unwrap().get(), 1);
        assert_eq!(Intensity::new(10).unwrap().get(), 10);
    }

    #[test]
    fn test_error_message() {
        let err = Intensity::new(11).unwrap_err();
        assert_eq!(err.message(), "Intensity must be between 1 and 10");
    }
}
