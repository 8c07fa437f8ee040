//! Room registry
//!
//! Maps each user to the set of live connections that authenticated as that
//! user. A connection is in at most one room at a time.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use kernel::id::UserId;
use tokio::sync::{RwLock, mpsc};

use crate::domain::message::ServerMessage;

/// Outbound half of a connection
pub type MessageSender = mpsc::UnboundedSender<ServerMessage>;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique connection handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Rooms {
    by_user: HashMap<UserId, HashMap<ConnectionId, MessageSender>>,
    membership: HashMap<ConnectionId, UserId>,
}

impl Rooms {
    fn remove_connection(&mut self, connection_id: ConnectionId) -> Option<UserId> {
        let user_id = self.membership.remove(&connection_id)?;
        if let Some(room) = self.by_user.get_mut(&user_id) {
            room.remove(&connection_id);
            if room.is_empty() {
                self.by_user.remove(&user_id);
            }
        }
        Some(user_id)
    }
}

/// Shared registry handle. Cloning shares the same rooms.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<RwLock<Rooms>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a connection in the room of `user_id`, leaving any previous room
    pub async fn join(&self, user_id: UserId, connection_id: ConnectionId, sender: MessageSender) {
        let mut rooms = self.rooms.write().await;
        rooms.remove_connection(connection_id);
        rooms
            .by_user
            .entry(user_id)
            .or_default()
            .insert(connection_id, sender);
        rooms.membership.insert(connection_id, user_id);
    }

    /// Remove a connection from its room. Returns the room it was in.
    pub async fn leave(&self, connection_id: ConnectionId) -> Option<UserId> {
        self.rooms.write().await.remove_connection(connection_id)
    }

    /// Send `message` to every live connection of `user_id`.
    ///
    /// Connections whose receiver is gone are pruned. Returns the number of
    /// connections the message was handed to.
    pub async fn broadcast(&self, user_id: &UserId, message: &ServerMessage) -> usize {
        let mut rooms = self.rooms.write().await;
        let Some(room) = rooms.by_user.get(user_id) else {
            return 0;
        };

        let mut delivered = 0;
        let mut dead = Vec::new();
        for (connection_id, sender) in room {
            if sender.send(message.clone()).is_ok() {
                delivered += 1;
            } else {
                dead.push(*connection_id);
            }
        }

        for connection_id in dead {
            tracing::debug!(connection_id = %connection_id, "Pruned closed connection");
            rooms.remove_connection(connection_id);
        }

        delivered
    }

    /// Number of connections in the room of `user_id`
    pub async fn connection_count(&self, user_id: &UserId) -> usize {
        self.rooms
            .read()
            .await
            .by_user
            .get(user_id)
            .map_or(0, HashMap::len)
    }

    /// Room a connection currently belongs to
    pub async fn room_of(&self, connection_id: ConnectionId) -> Option<UserId> {
        self.rooms
            .read()
            .await
            .membership
            .get(&connection_id)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn channel() -> (MessageSender, mpsc::UnboundedReceiver<ServerMessage>) {
        mpsc::unbounded_channel()
    }

    #[tokio::test]
    async fn test_broadcast_reaches_only_the_room() {
        let registry = RoomRegistry::new();
        let alice = UserId::new();
        let bob = UserId::new();

        let (tx_a1, mut rx_a1) = channel();
        let (tx_a2, mut rx_a2) = channel();
        let (tx_b, mut rx_b) = channel();
        registry.join(alice, ConnectionId::next(), tx_a1).await;
        registry.join(alice, ConnectionId::next(), tx_a2).await;
        registry.join(bob, ConnectionId::next(), tx_b).await;

        let msg = ServerMessage::new("workout:created", json!({ "id": "w1" }));
        assert_eq!(registry.broadcast(&alice, &msg).await, 2);

        assert_eq!(rx_a1.try_recv().unwrap(), msg);
        assert_eq!(rx_a2.try_recv().unwrap(), msg);
        assert!(rx_b.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_to_empty_room() {
        let registry = RoomRegistry::new();
        let msg = ServerMessage::new("workout:deleted", json!({ "id": "w1" }));
        assert_eq!(registry.broadcast(&UserId::new(), &msg).await, 0);
    }

    #[tokio::test]
    async fn test_dead_connections_are_pruned() {
        let registry = RoomRegistry::new();
        let user = UserId::new();
        let (tx_live, _rx_live) = channel();
        let (tx_dead, rx_dead) = channel();
        registry.join(user, ConnectionId::next(), tx_live).await;
        registry.join(user, ConnectionId::next(), tx_dead).await;
        drop(rx_dead);

        let msg = ServerMessage::new("workout:updated", json!({}));
        assert_eq!(registry.broadcast(&user, &msg).await, 1);
        assert_eq!(registry.connection_count(&user).await, 1);
    }

    #[tokio::test]
    async fn test_rejoin_moves_connection() {
        let registry = RoomRegistry::new();
        let first = UserId::new();
        let second = UserId::new();
        let connection_id = ConnectionId::next();
        let (tx, _rx) = channel();

        registry.join(first, connection_id, tx.clone()).await;
        registry.join(second, connection_id, tx).await;

        assert_eq!(registry.connection_count(&first).await, 0);
        assert_eq!(registry.connection_count(&second).await, 1);
        assert_eq!(registry.room_of(connection_id).await, Some(second));
    }

    #[tokio::test]
    async fn test_leave() {
        let registry = RoomRegistry::new();
        let user = UserId::new();
        let connection_id = ConnectionId::next();
        let (tx, _rx) = channel();
        registry.join(user, connection_id, tx).await;

        assert_eq!(registry.leave(connection_id).await, Some(user));
        assert_eq!(registry.leave(connection_id).await, None);
        assert_eq!(registry.connection_count(&user).await, 0);
    }

    #[test]
    fn test_connection_ids_are_unique() {
        assert_ne!(ConnectionId::next(), ConnectionId::next());
    }
}
