//! Session length in whole minutes

use serde::{Deserialize, Serialize};
use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

pub const DURATION_MIN_MINUTES: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationMinutes(i32);

impl DurationMinutes {
    pub fn new(minutes: i64) -> AppResult<Self> {
        if minutes < DURATION_MIN_MINUTES {
            return Err(AppError::bad_request("Duration must be at least 1 minute"));
        }
        let minutes = i32::try_from(minutes)
            .map_err(|_| AppError::bad_request("Duration is too large"))?;
        Ok(Self(minutes))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(minutes: i32) -> Self {
        Self(minutes)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(DurationMinutes::new(0).is_err());
        assert!(DurationMinutes::new(-5).is_err());
        assert_eq!(DurationMinutes::new(1).unwrap().get(), 1);
        assert!(DurationMinutes::new(i64::from(i32::MAX) + 1).is_err());
    }
}
