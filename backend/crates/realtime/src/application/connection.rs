//! Connection session
//!
//! Protocol state of one live connection, independent of the transport.
//! The WebSocket handler feeds it text frames and drains its receiver.

use kernel::id::UserId;
use tokio::sync::mpsc;

use crate::domain::message::{ClientMessage, EVENT_AUTHENTICATE, ServerMessage};
use crate::domain::room::{ConnectionId, MessageSender, RoomRegistry};

pub struct ConnectionSession {
    connection_id: ConnectionId,
    registry: RoomRegistry,
    /// User resolved from the session cookie at upgrade time
    session_user: Option<UserId>,
    sender: MessageSender,
}

impl ConnectionSession {
    /// Open a session. The receiver yields every message addressed to this
    /// connection, both replies and room broadcasts.
    pub fn open(
        registry: RoomRegistry,
        session_user: Option<UserId>,
    ) -> (Self, mpsc::UnboundedReceiver<ServerMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let session = Self {
            connection_id: ConnectionId::next(),
            registry,
            session_user,
            sender,
        };
        (session, receiver)
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    /// Handle one text frame from the client
    pub async fn handle_text(&self, text: &str) {
        let message: ClientMessage = match serde_json::from_str(text) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(connection_id = %self.connection_id, error = %e, "Unreadable frame");
                self.reply(ServerMessage::error("Malformed message"));
                return;
            }
        };

        match message.event.as_str() {
            EVENT_AUTHENTICATE => self.authenticate(&message).await,
            other => {
                tracing::debug!(connection_id = %self.connection_id, event = %other, "Ignored event");
            }
        }
    }

    async fn authenticate(&self, message: &ClientMessage) {
        let Some(claimed) = message.data.as_str().and_then(|s| s.parse::<UserId>().ok()) else {
            self.reply(ServerMessage::error("Invalid user id"));
            return;
        };

        match self.session_user {
            Some(session_user) if session_user == claimed => {
                self.registry
                    .join(claimed, self.connection_id, self.sender.clone())
                    .await;
                tracing::info!(
                    connection_id = %self.connection_id,
                    user_id = %claimed,
                    "Connection joined user room"
                );
                self.reply(ServerMessage::authenticated());
            }
            Some(_) => {
                tracing::warn!(
                    connection_id = %self.connection_id,
                    claimed = %claimed,
                    "Connection claimed another user's room"
                );
                self.reply(ServerMessage::error("User id does not match session"));
            }
            None => self.reply(ServerMessage::error("Not authenticated")),
        }
    }

    fn reply(&self, message: ServerMessage) {
        // The receiver only goes away with the connection itself
        let _ = self.sender.send(message);
    }

    /// Leave the room, if any. Call once the transport is closed.
    pub async fn close(self) {
        if let Some(user_id) = self.registry.leave(self.connection_id).await {
            tracing::debug!(connection_id = %self.connection_id, user_id = %user_id, "Connection left user room");
        }
    }
}
