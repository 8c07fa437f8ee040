//! WebSocket Handler

use axum::Extension;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use auth::middleware::AuthStatus;
use kernel::id::UserId;

use crate::application::connection::ConnectionSession;
use crate::domain::room::RoomRegistry;

/// Shared state for the realtime handler
#[derive(Clone)]
pub struct RealtimeState {
    pub registry: RoomRegistry,
}

/// GET /api/realtime
pub async fn connect(
    State(state): State<RealtimeState>,
    Extension(status): Extension<AuthStatus>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| serve(socket, state.registry, status.user_id))
}

async fn serve(mut socket: WebSocket, registry: RoomRegistry, session_user: Option<UserId>) {
    let (session, mut outbound) = ConnectionSession::open(registry, session_user);
    tracing::debug!(connection_id = %session.connection_id(), "Realtime connection opened");

    loop {
        tokio::select! {
            message = outbound.recv() => {
                let Some(message) = message else { break };
                let text = match message.to_json() {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to encode realtime message");
                        continue;
                    }
                };
                if socket.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
            frame = socket.recv() => match frame {
                Some(Ok(Message::Text(text))) => session.handle_text(text.as_str()).await,
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            }
        }
    }

    tracing::debug!(connection_id = %session.connection_id(), "Realtime connection closed");
    session.close().await;
}
