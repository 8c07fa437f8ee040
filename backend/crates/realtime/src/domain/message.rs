//! Wire messages
//!
//! Every frame is a JSON text frame of the form `{"event": ..., "data": ...}`.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Client asks to join the room of a user
pub const EVENT_AUTHENTICATE: &str = "authenticate";
/// Reply to a successful `authenticate`
pub const EVENT_AUTHENTICATED: &str = "authenticated";
/// Reply to a rejected or unreadable client frame
pub const EVENT_ERROR: &str = "error";

/// Frame sent by a client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientMessage {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

/// Frame pushed to a client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerMessage {
    pub event: String,
    pub data: Value,
}

impl ServerMessage {
    pub fn new(event: impl Into<String>, data: Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    pub fn authenticated() -> Self {
        Self::new(EVENT_AUTHENTICATED, json!({ "success": true }))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(
            EVENT_ERROR,
            json!({ "success": false, "error": message.into() }),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
