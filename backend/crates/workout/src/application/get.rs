//! Get Workout Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_workout_id;
use crate::domain::entity::workout::Workout;
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

pub struct GetWorkoutUseCase<R>
where
    R: WorkoutRepository,
{
    repo: Arc<R>,
}

impl<R> GetWorkoutUseCase<R>
where
    R: WorkoutRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, raw_id: &str) -> WorkoutResult<Workout> {
        let workout_id = parse_workout_id(raw_id)?;
        self.repo
            .find_for_user(user_id, &workout_id)
            .await?
            .ok_or(WorkoutError::NotFound)
    }
}
