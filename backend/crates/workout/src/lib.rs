//! Workout (Training Log) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Workout entity, value objects, stats, insights, events
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, realtime publisher
//!
//! ## Features
//! - CRUD on the caller's own workouts
//! - Aggregate stats and training insights
//! - `workout:created` / `workout:updated` / `workout:deleted` pushed to the
//!   owner's live connections
//!
//! ## Ownership
//! Every storage query is scoped by the caller's user id. A foreign workout
//! is reported exactly like a missing one.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::WorkoutConfig;
pub use error::{WorkoutError, WorkoutResult};
pub use infra::{MemoryWorkoutRepository, PgWorkoutRepository};
pub use presentation::{RoomEventPublisher, workout_router, workout_router_generic};
