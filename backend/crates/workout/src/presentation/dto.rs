//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{CreateWorkoutInput, UpdateWorkoutInput};
use crate::domain::entity::workout::Workout;
use crate::domain::stats::WorkoutStats;
use crate::domain::value_object::{Discipline, WorkoutDate};
use crate::error::{WorkoutError, WorkoutResult};

// ============================================================================
// Requests
// ============================================================================

/// Whole number sent either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WholeNumber {
    Int(i64),
    Text(String),
}

impl WholeNumber {
    fn parse(self, field: &str) -> WorkoutResult<i64> {
        match self {
            WholeNumber::Int(n) => Ok(n),
            WholeNumber::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| WorkoutError::Validation(format!("{} must be a whole number", field))),
        }
    }
}

/// Body of create and update. Which fields are required depends on the
/// operation, so every field is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutRequest {
    pub discipline: Option<String>,
    pub duration: Option<WholeNumber>,
    pub intensity: Option<WholeNumber>,
    pub notes: Option<String>,
    pub date: Option<String>,
}

impl WorkoutRequest {
    pub fn into_create_input(self) -> WorkoutResult<CreateWorkoutInput> {
        Ok(CreateWorkoutInput {
            discipline: self.discipline,
            duration: self.duration.map(|n| n.parse("Duration")).transpose()?,
            intensity: self.intensity.map(|n| n.parse("Intensity")).transpose()?,
            notes: self.notes,
            date: self.date,
        })
    }

    pub fn into_update_input(self) -> WorkoutResult<UpdateWorkoutInput> {
        Ok(UpdateWorkoutInput {
            discipline: self.discipline,
            duration: self.duration.map(|n| n.parse("Duration")).transpose()?,
            intensity: self.intensity.map(|n| n.parse("Intensity")).transpose()?,
            notes: self.notes,
            date: self.date,
        })
    }
}

/// `?limit=&skip=`. Unparseable values fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub skip: Option<String>,
}

impl ListQuery {
    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|s| s.trim().parse().ok())
    }

    pub fn skip(&self) -> Option<i64> {
        self.skip.as_deref().and_then(|s| s.trim().parse().ok())
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Public view of a workout. The owner is implied by the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub id: String,
    pub discipline: Discipline,
    pub duration: i32,
    pub intensity: i16,
    pub notes: String,
    pub date: WorkoutDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Workout> for WorkoutResponse {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.workout_id.to_string(),
            discipline: workout.discipline,
            duration: workout.duration.get(),
            intensity: workout.intensity.get(),
            notes: workout.notes.clone(),
            date: workout.date,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutListResponse {
    pub workouts: Vec<WorkoutResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutEnvelope {
    pub workout: WorkoutResponse,
}

/// Create / update response
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutMessageResponse {
    pub message: &'static str,
    pub workout: WorkoutResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub stats: WorkoutStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number_accepts_numbers_and_strings() {
        let req: WorkoutRequest =
            serde_json::from_str(r#"{"duration": 45, "intensity": "7"}"#).unwrap();
        let input = req.into_create_input().unwrap();
        assert_eq!(input.duration, Some(45));
        assert_eq!(input.intensity, Some(7));
    }

    #[test]
    fn test_whole_number_rejects_text() {
        let req: WorkoutRequest = serde_json::from_str(r#"{"duration": "long"}"#).unwrap();
        assert!(matches!(
            req.into_create_input(),
            Err(WorkoutError::Validation(ref m)) if m == "Duration must be a whole number"
        ));
    }

    #[test]
    fn test_list_query_ignores_garbage() {
        let q = ListQuery {
            limit: Some("abc".into()),
            skip: Some(" 5 ".into()),
        };
        assert_eq!(q.limit(), None);
        assert_eq!(q.skip(), Some(5));
    }
}
