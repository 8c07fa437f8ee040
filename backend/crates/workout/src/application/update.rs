//! Update Workout Use Case
//!
//! Partial update: only provided fields are validated and changed.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_workout_id;
use crate::domain::entity::workout::{Workout, WorkoutPatch};
use crate::domain::event::{WorkoutEvent, WorkoutEventPublisher};
use crate::domain::repository::WorkoutRepository;
use crate::domain::value_object::{Discipline, DurationMinutes, Intensity, WorkoutDate};
use crate::error::{WorkoutError, WorkoutResult};

#[derive(Debug, Default)]
pub struct UpdateWorkoutInput {
    pub discipline: Option<String>,
    pub duration: Option<i64>,
    pub intensity: Option<i64>,
    pub notes: Option<String>,
    pub date: Option<String>,
}

impl UpdateWorkoutInput {
    fn into_patch(self) -> WorkoutResult<WorkoutPatch> {
        Ok(WorkoutPatch {
            discipline: self
                .discipline
                .map(|d| Discipline::parse(d.trim()))
                .transpose()?,
            duration: self.duration.map(DurationMinutes::new).transpose()?,
            intensity: self.intensity.map(Intensity::new).transpose()?,
            notes: self.notes,
            date: self.date.map(|d| WorkoutDate::parse(&d)).transpose()?,
        })
    }
}

pub struct UpdateWorkoutUseCase<R, P>
where
    R: WorkoutRepository,
    P: WorkoutEventPublisher,
{
    repo: Arc<R>,
    events: Arc<P>,
}

impl<R, P> UpdateWorkoutUseCase<R, P>
where
    R: WorkoutRepository,
    P: WorkoutEventPublisher,
{
    pub fn new(repo: Arc<R>, events: Arc<P>) -> Self {
        Self { repo, events }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        raw_id: &str,
        input: UpdateWorkoutInput,
    ) -> WorkoutResult<Workout> {
        let workout_id = parse_workout_id(raw_id)?;
        let patch = input.into_patch()?;

        let mut workout = self
            .repo
            .find_for_user(&user_id, &workout_id)
            .await?
            .ok_or(WorkoutError::NotFound)?;

        workout.apply(patch);

        // Deleted between read and write
        if !self.repo.update(&workout).await? {
            return Err(WorkoutError::NotFound);
        }

        tracing::info!(user_id = %user_id, workout_id = %workout_id, "Workout updated");

        self.events
            .publish(&user_id, WorkoutEvent::Updated(workout.clone()))
            .await;

        Ok(workout)
    }
}
