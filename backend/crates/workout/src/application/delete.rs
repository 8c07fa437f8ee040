//! Delete Workout Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_workout_id;
use crate::domain::event::{WorkoutEvent, WorkoutEventPublisher};
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

pub struct DeleteWorkoutUseCase<R, P>
where
    R: WorkoutRepository,
    P: WorkoutEventPublisher,
{
    repo: Arc<R>,
    events: Arc<P>,
}

impl<R, P> DeleteWorkoutUseCase<R, P>
where
    R: WorkoutRepository,
    P: WorkoutEventPublisher,
{
    pub fn new(repo: Arc<R>, events: Arc<P>) -> Self {
        Self { repo, events }
    }

    pub async fn execute(&self, user_id: UserId, raw_id: &str) -> WorkoutResult<()> {
        let workout_id = parse_workout_id(raw_id)?;

        if !self.repo.delete_for_user(&user_id, &workout_id).await? {
            return Err(WorkoutError::NotFound);
        }

        tracing::info!(user_id = %user_id, workout_id = %workout_id, "Workout deleted");

        self.events
            .publish(&user_id, WorkoutEvent::Deleted { workout_id })
            .await;

        Ok(())
    }
}
