//! Realtime publishing of workout events
//!
//! Pushes each event to the owner's room with the same workout shape the
//! HTTP API returns.

use kernel::id::UserId;
use realtime::{RoomRegistry, ServerMessage};
use serde_json::json;

use crate::domain::event::{WorkoutEvent, WorkoutEventPublisher};
use crate::presentation::dto::WorkoutResponse;

#[derive(Debug, Clone)]
pub struct RoomEventPublisher {
    registry: RoomRegistry,
}

impl RoomEventPublisher {
    pub fn new(registry: RoomRegistry) -> Self {
        Self { registry }
    }
}

impl WorkoutEventPublisher for RoomEventPublisher {
    async fn publish(&self, user_id: &UserId, event: WorkoutEvent) {
        let data = match &event {
            WorkoutEvent::Created(workout) | WorkoutEvent::Updated(workout) => {
                serde_json::to_value(WorkoutResponse::from(workout))
            }
            WorkoutEvent::Deleted { workout_id } => Ok(json!({ "id": workout_id.to_string() })),
        };

        let data = match data {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, event = event.name(), "Failed to encode workout event");
                return;
            }
        };

        let delivered = self
            .registry
            .broadcast(user_id, &ServerMessage::new(event.name(), data))
            .await;

        tracing::debug!(
            user_id = %user_id,
            event = event.name(),
            delivered,
            "Published workout event"
        );
    }
}
