//! Realtime Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::AuthSessionRepository;
use auth::middleware::{AuthMiddlewareState, check_auth_session};

use crate::domain::room::RoomRegistry;
use crate::presentation::handlers::{self, RealtimeState};

/// Create the realtime router. The session cookie is resolved before the
/// upgrade so `authenticate` can be checked against it.
pub fn realtime_router<R>(
    registry: RoomRegistry,
    auth_repo: Arc<R>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let auth_state = AuthMiddlewareState {
        repo: auth_repo,
        config: auth_config,
    };

    Router::new()
        .route("/", get(handlers::connect))
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            check_auth_session::<R>,
        ))
        .with_state(RealtimeState { registry })
}
