//! Create Workout Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::workout::{NewWorkout, Workout};
use crate::domain::event::{WorkoutEvent, WorkoutEventPublisher};
use crate::domain::repository::WorkoutRepository;
use crate::domain::value_object::{Discipline, DurationMinutes, Intensity, WorkoutDate};
use crate::error::{WorkoutError, WorkoutResult};

/// Raw create input. `discipline`, `duration` and `intensity` are required.
#[derive(Debug, Default)]
pub struct CreateWorkoutInput {
    pub discipline: Option<String>,
    pub duration: Option<i64>,
    pub intensity: Option<i64>,
    pub notes: Option<String>,
    /// `YYYY-MM-DD`, today (UTC) when absent or blank
    pub date: Option<String>,
}

pub struct CreateWorkoutUseCase<R, P>
where
    R: WorkoutRepository,
    P: WorkoutEventPublisher,
{
    repo: Arc<R>,
    events: Arc<P>,
}

impl<R, P> CreateWorkoutUseCase<R, P>
where
    R: WorkoutRepository,
    P: WorkoutEventPublisher,
{
    pub fn new(repo: Arc<R>, events: Arc<P>) -> Self {
        Self { repo, events }
    }

    pub async fn execute(&self, user_id: UserId, input: CreateWorkoutInput) -> WorkoutResult<Workout> {
        let (Some(discipline), Some(duration), Some(intensity)) =
            (input.discipline, input.duration, input.intensity)
        else {
            return Err(WorkoutError::Validation("Missing required fields".to_string()));
        };
        if discipline.trim().is_empty() {
            return Err(WorkoutError::Validation("Missing required fields".to_string()));
        }

        let date = match input.date.as_deref().map(str::trim) {
            None | Some("") => WorkoutDate::today(),
            Some(raw) => WorkoutDate::parse(raw)?,
        };

        let fields = NewWorkout {
            discipline: Discipline::parse(discipline.trim())?,
            duration: DurationMinutes::new(duration)?,
            intensity: Intensity::new(intensity)?,
            notes: input.notes.unwrap_or_default(),
            date,
        };

        let workout = Workout::new(user_id, fields);
        self.repo.create(&workout).await?;

        tracing::info!(
            user_id = %user_id,
            workout_id = %workout.workout_id,
            discipline = %workout.discipline,
            "Workout created"
        );

        self.events
            .publish(&user_id, WorkoutEvent::Created(workout.clone()))
            .await;

        Ok(workout)
    }
}
