//! Router assembly
//!
//! Wires the bounded contexts together. Generic over the repositories so the
//! same router runs on PostgreSQL in production and in memory in tests.

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::{AuthSessionRepository, UserRepository};
use axum::{Router, middleware, routing::get};
use platform::metrics::MetricsCollector;
use realtime::{RoomRegistry, realtime_router};
use workout::domain::repository::WorkoutRepository;
use workout::{RoomEventPublisher, WorkoutConfig, workout_router_generic};

use crate::handlers::{self, OpsState};
use crate::metrics::record_metrics;

/// Shared handles the router is built from
pub struct AppComponents<A, W> {
    pub auth_repo: Arc<A>,
    pub workout_repo: Arc<W>,
    pub auth_config: Arc<AuthConfig>,
    pub workout_config: Arc<WorkoutConfig>,
    pub rooms: RoomRegistry,
    pub metrics: Arc<MetricsCollector>,
}

pub fn build_router<A, W>(components: AppComponents<A, W>) -> Router
where
    A: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    let AppComponents {
        auth_repo,
        workout_repo,
        auth_config,
        workout_config,
        rooms,
        metrics,
    } = components;

    let ops = Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/metrics", get(handlers::metrics))
        .with_state(OpsState {
            metrics: metrics.clone(),
        });

    let events = Arc::new(RoomEventPublisher::new(rooms.clone()));

    Router::new()
        .merge(ops)
        .nest(
            "/api/auth",
            auth::auth_router_generic(auth_repo.clone(), auth_config.clone()),
        )
        .nest(
            "/api/workouts",
            workout_router_generic(
                workout_repo,
                events,
                workout_config,
                auth_repo.clone(),
                auth_config.clone(),
            ),
        )
        .nest("/api/realtime", realtime_router(rooms, auth_repo, auth_config))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(metrics, record_metrics))
}
