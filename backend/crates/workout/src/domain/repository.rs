//! Repository Traits
//!
//! Every query is scoped by the owning user; a workout of another user is
//! indistinguishable from a missing one.

use kernel::id::{UserId, WorkoutId};

use crate::domain::entity::workout::Workout;
use crate::domain::stats::WorkoutStats;
use crate::domain::value_object::Page;
use crate::error::WorkoutResult;

#[trait_variant::make(WorkoutRepository: Send)]
pub trait LocalWorkoutRepository {
    async fn create(&self, workout: &Workout) -> WorkoutResult<()>;

    /// Workouts of a user, newest `date` first, ties by newest `created_at`
    async fn list_for_user(&self, user_id: &UserId, page: Page) -> WorkoutResult<Vec<Workout>>;

    async fn find_for_user(
        &self,
        user_id: &UserId,
        workout_id: &WorkoutId,
    ) -> WorkoutResult<Option<Workout>>;

    /// Persist the mutable fields of `workout`, matching on both its id and
    /// its owner. Returns `false` when no such row exists.
    async fn update(&self, workout: &Workout) -> WorkoutResult<bool>;

    /// Returns `false` when no such row exists
    async fn delete_for_user(&self, user_id: &UserId, workout_id: &WorkoutId)
    -> WorkoutResult<bool>;

    async fn stats_for_user(&self, user_id: &UserId) -> WorkoutResult<WorkoutStats>;
}
