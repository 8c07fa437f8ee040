//! Domain Layer
//!
//! Wire messages and the room registry.

pub mod message;
pub mod room;

pub use message::{ClientMessage, ServerMessage};
pub use room::{ConnectionId, MessageSender, RoomRegistry};
