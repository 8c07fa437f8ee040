//! Workout Entity

use chrono::{DateTime, Utc};
use kernel::id::{UserId, WorkoutId};

use crate::domain::value_object::{Discipline, DurationMinutes, Intensity, WorkoutDate};

/// One training session. `user_id` never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub workout_id: WorkoutId,
    pub user_id: UserId,
    pub discipline: Discipline,
    pub duration: DurationMinutes,
    pub intensity: Intensity,
    pub notes: String,
    pub date: WorkoutDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields of a new workout
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub discipline: Discipline,
    pub duration: DurationMinutes,
    pub intensity: Intensity,
    pub notes: String,
    pub date: WorkoutDate,
}

/// Validated partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct WorkoutPatch {
    pub discipline: Option<Discipline>,
    pub duration: Option<DurationMinutes>,
    pub intensity: Option<Intensity>,
    pub notes: Option<String>,
    pub date: Option<WorkoutDate>,
}

impl Workout {
    pub fn new(user_id: UserId, fields: NewWorkout) -> Self {
        let now = Utc::now();

        Self {
            workout_id: WorkoutId::new(),
            user_id,
            discipline: fields.discipline,
            duration: fields.duration,
            intensity: fields.intensity,
            notes: fields.notes,
            date: fields.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a patch and bump `updated_at`
    pub fn apply(&mut self, patch: WorkoutPatch) {
        if let Some(discipline) = patch.discipline {
            self.discipline = discipline;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = intensity;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Training load used by the insights: minutes × intensity
    pub fn load(&self) -> i64 {
        i64::from(self.duration.get()) * i64::from(self.intensity.get())
    }
}
