//! Unit tests for realtime crate

#[cfg(test)]
mod connection_tests {
    use kernel::id::UserId;
    use serde_json::json;

    use crate::application::ConnectionSession;
    use crate::domain::{RoomRegistry, ServerMessage};

    fn authenticate_frame(user_id: &UserId) -> String {
        json!({ "event": "authenticate", "data": user_id.to_string() }).to_string()
    }

    #[tokio::test]
    async fn test_authenticate_joins_room() {
        let registry = RoomRegistry::new();
        let user = UserId::new();
        let (session, mut rx) = ConnectionSession::open(registry.clone(), Some(user));

        session.handle_text(&authenticate_frame(&user)).await;

        assert_eq!(rx.try_recv().unwrap(), ServerMessage::authenticated());
        assert_eq!(registry.connection_count(&user).await, 1);

        let event = ServerMessage::new("workout:created", json!({ "id": "w1" }));
        assert_eq!(registry.broadcast(&user, &event).await, 1);
        assert_eq!(rx.try_recv().unwrap(), event);
    }

    #[tokio::test]
    async fn test_authenticate_for_other_user_is_refused() {
        let registry = RoomRegistry::new();
        let me = UserId::new();
        let victim = UserId::new();
        let (session, mut rx) = ConnectionSession::open(registry.clone(), Some(me));

        session.handle_text(&authenticate_frame(&victim)).await;

        let reply = rx.try_recv().unwrap();
        assert_eq!(reply.event, "error");
        assert_eq!(reply.data["success"], false);
        assert_eq!(registry.connection_count(&victim).await, 0);
        assert_eq!(registry.room_of(session.connection_id()).await, None);
    }

    #[tokio::test]
    async fn test_authenticate_without_session_is_refused() {
        let registry = RoomRegistry::new();
        let user = UserId::new();
        let (session, mut rx) = ConnectionSession::open(registry.clone(), None);

        session.handle_text(&authenticate_frame(&user)).await;

        assert_eq!(rx.try_recv().unwrap(), ServerMessage::error("Not authenticated"));
        assert_eq!(registry.connection_count(&user).await, 0);
    }

    #[tokio::test]
    async fn test_bad_frames() {
        let registry = RoomRegistry::new();
        let (session, mut rx) = ConnectionSession::open(registry, Some(UserId::new()));

        session.handle_text("not json").await;
        assert_eq!(rx.try_recv().unwrap(), ServerMessage::error("Malformed message"));

        session
            .handle_text(r#"{"event":"authenticate","data":"not-a-uuid"}"#)
            .await;
        assert_eq!(rx.try_recv().unwrap(), ServerMessage::error("Invalid user id"));

        session.handle_text(r#"{"event":"ping"}"#).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_close_leaves_room() {
        let registry = RoomRegistry::new();
        let user = UserId::new();
        let (session, _rx) = ConnectionSession::open(registry.clone(), Some(user));
        session.handle_text(&authenticate_frame(&user)).await;
        assert_eq!(registry.connection_count(&user).await, 1);

        session.close().await;
        assert_eq!(registry.connection_count(&user).await, 0);
    }

    #[tokio::test]
    async fn test_each_connection_of_a_user_receives_once() {
        let registry = RoomRegistry::new();
        let user = UserId::new();
        let (first, mut rx1) = ConnectionSession::open(registry.clone(), Some(user));
        let (second, mut rx2) = ConnectionSession::open(registry.clone(), Some(user));
        first.handle_text(&authenticate_frame(&user)).await;
        second.handle_text(&authenticate_frame(&user)).await;
        // Re-authenticating does not duplicate membership
        second.handle_text(&authenticate_frame(&user)).await;
        while rx1.try_recv().is_ok() {}
        while rx2.try_recv().is_ok() {}

        let event = ServerMessage::new("workout:deleted", json!({ "id": "w1" }));
        assert_eq!(registry.broadcast(&user, &event).await, 2);
        assert_eq!(rx1.try_recv().unwrap(), event);
        assert_eq!(rx2.try_recv().unwrap(), event);
        assert!(rx1.try_recv().is_err());
        assert!(rx2.try_recv().is_err());
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::{AuthConfig, MemoryAuthRepository};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::{RoomRegistry, realtime_router};

    #[tokio::test]
    async fn test_plain_get_is_not_upgraded() {
        let app = realtime_router(
            RoomRegistry::new(),
            Arc::new(MemoryAuthRepository::new()),
            Arc::new(AuthConfig::development()),
        );

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
