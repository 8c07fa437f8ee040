//! Statistics and Insights Use Cases

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::WorkoutConfig;
use crate::domain::insights::{self, TrainingInsights};
use crate::domain::repository::WorkoutRepository;
use crate::domain::stats::WorkoutStats;
use crate::domain::value_object::Page;
use crate::error::WorkoutResult;

pub struct WorkoutStatsUseCase<R>
where
    R: WorkoutRepository,
{
    repo: Arc<R>,
}

impl<R> WorkoutStatsUseCase<R>
where
    R: WorkoutRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> WorkoutResult<WorkoutStats> {
        self.repo.stats_for_user(user_id).await
    }
}

pub struct TrainingInsightsUseCase<R>
where
    R: WorkoutRepository,
{
    repo: Arc<R>,
    config: Arc<WorkoutConfig>,
}

impl<R> TrainingInsightsUseCase<R>
where
    R: WorkoutRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<WorkoutConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, user_id: &UserId) -> WorkoutResult<TrainingInsights> {
        let page = Page {
            limit: self.config.insights_window,
            skip: 0,
        };
        let recent = self.repo.list_for_user(user_id, page).await?;
        Ok(insights::analyze(&recent))
    }
}
