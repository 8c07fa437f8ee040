//! Domain Layer
//!
//! Contains entities, value objects, repository traits, and the pure
//! statistics and insights over workouts.

pub mod entity;
pub mod event;
pub mod insights;
pub mod repository;
pub mod stats;
pub mod value_object;

// Re-exports
pub use entity::{NewWorkout, Workout, WorkoutPatch};
pub use event::{WorkoutEvent, WorkoutEventPublisher};
pub use repository::WorkoutRepository;
pub use stats::WorkoutStats;
