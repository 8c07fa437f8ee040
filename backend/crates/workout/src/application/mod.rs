//! Application Layer
//!
//! Use cases. Every use case takes the caller's user id and never touches
//! another user's workouts.

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod update;

// Re-exports
pub use config::WorkoutConfig;
pub use create::{CreateWorkoutInput, CreateWorkoutUseCase};
pub use delete::DeleteWorkoutUseCase;
pub use get::GetWorkoutUseCase;
pub use list::{ListWorkoutsInput, ListWorkoutsUseCase};
pub use stats::{TrainingInsightsUseCase, WorkoutStatsUseCase};
pub use update::{UpdateWorkoutInput, UpdateWorkoutUseCase};

use kernel::id::WorkoutId;

use crate::error::{WorkoutError, WorkoutResult};

/// A malformed id can't name an existing workout
pub(crate) fn parse_workout_id(raw: &str) -> WorkoutResult<WorkoutId> {
    raw.parse().map_err(|_| WorkoutError::NotFound)
}
