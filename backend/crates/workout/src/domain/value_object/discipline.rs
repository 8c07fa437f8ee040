//! Discipline Value Object
//!
//! Training discipline of a session. Stored and serialized by display name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Discipline {
    Boxing,
    Wrestling,
    #[serde(rename = "BJJ")]
    Bjj,
    #[serde(rename = "Muay Thai")]
    MuayThai,
    #[serde(rename = "Strength & Conditioning")]
    StrengthAndConditioning,
    Cardio,
    Mobility,
    Sprints,
    Squats,
    #[serde(rename = "Bench Press")]
    BenchPress,
}

impl Discipline {
    pub const ALL: [Discipline; 10] = [
        Discipline::Boxing,
        Discipline::Wrestling,
        Discipline::Bjj,
        Discipline::MuayThai,
        Discipline::StrengthAndConditioning,
        Discipline::Cardio,
        Discipline::Mobility,
        Discipline::Sprints,
        Discipline::Squats,
        Discipline::BenchPress,
    ];

    /// Disciplines every fighter is expected to cover
    pub const CORE: [Discipline; 8] = [
        Discipline::Boxing,
        Discipline::Wrestling,
        Discipline::Bjj,
        Discipline::MuayThai,
        Discipline::StrengthAndConditioning,
        Discipline::Cardio,
        Discipline::Mobility,
        Discipline::Sprints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Boxing => "Boxing",
            Discipline::Wrestling => "Wrestling",
            Discipline::Bjj => "BJJ",
            Discipline::MuayThai => "Muay Thai",
            Discipline::StrengthAndConditioning => "Strength & Conditioning",
            Discipline::Cardio => "Cardio",
            Discipline::Mobility => "Mobility",
            Discipline::Sprints => "Sprints",
            Discipline::Squats => "Squats",
            Discipline::BenchPress => "Bench Press",
        }
    }

    pub fn is_striking(&self) -> bool {
        matches!(self, Discipline::Boxing | Discipline::MuayThai)
    }

    pub fn is_grappling(&self) -> bool {
        matches!(self, Discipline::Wrestling | Discipline::Bjj)
    }

    /// Parse user input. Names are matched exactly.
    pub fn parse(raw: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == raw)
            .ok_or_else(|| {
                AppError::bad_request(format!(
                    "Discipline must be one of: {}",
                    Self::ALL.map(|d| d.as_str()).join(", ")
                ))
            })
    }
}

impl FromStr for Discipline {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_name() {
        for d in Discipline::ALL {
            assert_eq!(Discipline::parse(d.as_str()).unwrap(), d);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_wrong_case() {
        assert!(Discipline::parse("Karate").is_err());
        assert!(Discipline::parse("bjj").is_err());
        assert!(Discipline::parse("").is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Discipline::StrengthAndConditioning).unwrap();
        assert_eq!(json, "\"Strength & Conditioning\"");
        let d: Discipline = serde_json::from_str("\"Muay Thai\"").unwrap();
        assert_eq!(d, Discipline::MuayThai);
    }

    #[test]
    fn test_striking_and_grappling() {
        assert!(Discipline::Boxing.is_striking());
        assert!(Discipline::Bjj.is_grappling());
        assert!(!Discipline::Cardio.is_striking());
        assert!(!Discipline::Cardio.is_grappling());
    }
}
