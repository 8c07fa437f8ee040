//! Presentation Layer
//!
//! WebSocket handler and router.

pub mod handlers;
pub mod router;

pub use handlers::RealtimeState;
pub use router::realtime_router;
