//! Workout Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use auth::domain::repository::AuthSessionRepository;
use auth::middleware::{AuthMiddlewareState, require_auth_session};
use auth::{AuthConfig, PgAuthRepository};
use realtime::RoomRegistry;

use crate::application::WorkoutConfig;
use crate::domain::event::WorkoutEventPublisher;
use crate::domain::repository::WorkoutRepository;
use crate::infra::postgres::PgWorkoutRepository;
use crate::presentation::events::RoomEventPublisher;
use crate::presentation::handlers::{self, WorkoutAppState};

/// Create the Workout router with PostgreSQL repositories and realtime push
pub fn workout_router(
    repo: Arc<PgWorkoutRepository>,
    registry: RoomRegistry,
    config: Arc<WorkoutConfig>,
    auth_repo: Arc<PgAuthRepository>,
    auth_config: Arc<AuthConfig>,
) -> Router {
    workout_router_generic(
        repo,
        Arc::new(RoomEventPublisher::new(registry)),
        config,
        auth_repo,
        auth_config,
    )
}

/// Create a generic Workout router for any repository, publisher and session
/// store implementation
pub fn workout_router_generic<R, P, A>(
    repo: Arc<R>,
    events: Arc<P>,
    config: Arc<WorkoutConfig>,
    auth_repo: Arc<A>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
    A: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = WorkoutAppState {
        repo,
        events,
        config,
    };
    let auth_state = AuthMiddlewareState {
        repo: auth_repo,
        config: auth_config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list::<R, P>).post(handlers::create::<R, P>),
        )
        .route("/stats/summary", get(handlers::stats::<R, P>))
        .route("/stats/insights", get(handlers::insights::<R, P>))
        .route(
            "/{id}",
            get(handlers::get::<R, P>)
                .put(handlers::update::<R, P>)
                .delete(handlers::delete::<R, P>),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            require_auth_session::<A>,
        ))
        .with_state(state)
}
