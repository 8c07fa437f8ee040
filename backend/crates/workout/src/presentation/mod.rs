//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the realtime event publisher.

pub mod dto;
pub mod events;
pub mod handlers;
pub mod router;

pub use events::RoomEventPublisher;
pub use handlers::WorkoutAppState;
pub use router::{workout_router, workout_router_generic};
