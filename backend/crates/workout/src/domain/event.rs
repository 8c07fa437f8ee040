//! Workout change notifications

use kernel::id::{UserId, WorkoutId};

use crate::domain::entity::workout::Workout;

pub const EVENT_WORKOUT_CREATED: &str = "workout:created";
pub const EVENT_WORKOUT_UPDATED: &str = "workout:updated";
pub const EVENT_WORKOUT_DELETED: &str = "workout:deleted";

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutEvent {
    Created(Workout),
    Updated(Workout),
    Deleted { workout_id: WorkoutId },
}

impl WorkoutEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutEvent::Created(_) => EVENT_WORKOUT_CREATED,
            WorkoutEvent::Updated(_) => EVENT_WORKOUT_UPDATED,
            WorkoutEvent::Deleted { .. } => EVENT_WORKOUT_DELETED,
        }
    }
}

/// Pushes workout events to the owner's live connections.
///
/// Publishing cannot fail from the caller's point of view; delivery problems
/// are the publisher's to log.
#[trait_variant::make(WorkoutEventPublisher: Send)]
pub trait LocalWorkoutEventPublisher {
    async fn publish(&self, user_id: &UserId, event: WorkoutEvent);
}
