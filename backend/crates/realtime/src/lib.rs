//! Realtime (Per-User Push) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Wire messages, room registry
//! - `application/` - Per-connection protocol state
//! - `presentation/` - WebSocket handler, router
//!
//! ## Protocol
//! A client opens `GET /api/realtime` with its session cookie and sends
//! `{"event":"authenticate","data":"<user-id>"}`. When the id matches the
//! session the connection joins that user's room and receives every
//! `workout:*` event published for the user until it disconnects.
//!
//! Delivery is fire-and-forget: no acknowledgement, replay, or persistence.

pub mod application;
pub mod domain;
pub mod presentation;

pub use domain::{ConnectionId, RoomRegistry, ServerMessage};
pub use presentation::realtime_router;

#[cfg(test)]
mod tests;
