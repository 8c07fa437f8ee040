//! Aggregate statistics over a user's workouts

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    pub total_sessions: i64,
    pub total_duration: i64,
    /// Mean intensity rounded to one decimal, 0 with no sessions
    pub avg_intensity: f64,
}

impl WorkoutStats {
    pub const EMPTY: WorkoutStats = WorkoutStats {
        total_sessions: 0,
        total_duration: 0,
        avg_intensity: 0.0,
    };

    /// Build from raw sums as returned by storage
    pub fn from_totals(total_sessions: i64, total_duration: i64, intensity_sum: i64) -> Self {
        if total_sessions <= 0 {
            return Self::EMPTY;
        }
        let mean = intensity_sum as f64 / total_sessions as f64;
        Self {
            total_sessions,
            total_duration,
            avg_intensity: (mean * 10.0).round() / 10.0,
        }
    }
}
