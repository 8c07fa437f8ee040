//! List Workouts Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::WorkoutConfig;
use crate::domain::entity::workout::Workout;
use crate::domain::repository::WorkoutRepository;
use crate::error::WorkoutResult;

pub struct ListWorkoutsInput {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

pub struct ListWorkoutsUseCase<R>
where
    R: WorkoutRepository,
{
    repo: Arc<R>,
    config: Arc<WorkoutConfig>,
}

impl<R> ListWorkoutsUseCase<R>
where
    R: WorkoutRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<WorkoutConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: ListWorkoutsInput,
    ) -> WorkoutResult<Vec<Workout>> {
        let page = self.config.page(input.limit, input.skip);
        self.repo.list_for_user(user_id, page).await
    }
}
