//! Workout Date Value Object
//!
//! Calendar day of a session, exchanged as `YYYY-MM-DD`.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkoutDate(NaiveDate);

impl WorkoutDate {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        // chrono accepts unpadded fields; require the canonical shape
        if raw.len() != 10 {
            return Err(Self::format_error());
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| Self::format_error())
    }

    /// Current UTC day
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    fn format_error() -> AppError {
        AppError::bad_request("Date must be in YYYY-MM-DD format")
    }
}

impl fmt::Display for WorkoutDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for WorkoutDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkoutDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| serde::de::Error::custom(e.message()))
    }
}
