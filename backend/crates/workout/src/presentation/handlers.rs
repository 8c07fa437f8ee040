//! HTTP Handlers
//!
//! Every handler runs behind `require_auth_session`, so the caller is always
//! present in the request extensions.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use auth::middleware::AuthenticatedUser;
use std::sync::Arc;

use crate::application::{
    CreateWorkoutUseCase, DeleteWorkoutUseCase, GetWorkoutUseCase, ListWorkoutsInput,
    ListWorkoutsUseCase, TrainingInsightsUseCase, UpdateWorkoutUseCase, WorkoutConfig,
    WorkoutStatsUseCase,
};
use crate::domain::event::WorkoutEventPublisher;
use crate::domain::insights::TrainingInsights;
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};
use crate::presentation::dto::{
    ListQuery, MessageResponse, StatsResponse, WorkoutEnvelope, WorkoutListResponse,
    WorkoutMessageResponse, WorkoutRequest, WorkoutResponse,
};

/// Shared state for workout handlers
#[derive(Clone)]
pub struct WorkoutAppState<R, P>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub events: Arc<P>,
    pub config: Arc<WorkoutConfig>,
}

/// GET /api/workouts
pub async fn list<R, P>(
    State(state): State<WorkoutAppState<R, P>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Query(query): Query<ListQuery>,
) -> WorkoutResult<Json<WorkoutListResponse>>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    let use_case = ListWorkoutsUseCase::new(state.repo.clone(), state.config.clone());
    let workouts = use_case
        .execute(
            &caller.user_id,
            ListWorkoutsInput {
                limit: query.limit(),
                skip: query.skip(),
            },
        )
        .await?;

    Ok(Json(WorkoutListResponse {
        workouts: workouts.iter().map(WorkoutResponse::from).collect(),
    }))
}

/// POST /api/workouts
pub async fn create<R, P>(
    State(state): State<WorkoutAppState<R, P>>,
    Extension(caller): Extension<AuthenticatedUser>,
    payload: Result<Json<WorkoutRequest>, JsonRejection>,
) -> WorkoutResult<impl IntoResponse>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(reject_body)?;

    let use_case = CreateWorkoutUseCase::new(state.repo.clone(), state.events.clone());
    let workout = use_case
        .execute(caller.user_id, req.into_create_input()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WorkoutMessageResponse {
            message: "Workout created successfully",
            workout: WorkoutResponse::from(&workout),
        }),
    ))
}

/// GET /api/workouts/{id}
pub async fn get<R, P>(
    State(state): State<WorkoutAppState<R, P>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> WorkoutResult<Json<WorkoutEnvelope>>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    let use_case = GetWorkoutUseCase::new(state.repo.clone());
    let workout = use_case.execute(&caller.user_id, &id).await?;

    Ok(Json(WorkoutEnvelope {
        workout: WorkoutResponse::from(&workout),
    }))
}

/// PUT /api/workouts/{id}
pub async fn update<R, P>(
    State(state): State<WorkoutAppState<R, P>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<WorkoutRequest>, JsonRejection>,
) -> WorkoutResult<Json<WorkoutMessageResponse>>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(reject_body)?;

    let use_case = UpdateWorkoutUseCase::new(state.repo.clone(), state.events.clone());
    let workout = use_case
        .execute(caller.user_id, &id, req.into_update_input()?)
        .await?;

    Ok(Json(WorkoutMessageResponse {
        message: "Workout updated successfully",
        workout: WorkoutResponse::from(&workout),
    }))
}

/// DELETE /api/workouts/{id}
pub async fn delete<R, P>(
    State(state): State<WorkoutAppState<R, P>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> WorkoutResult<Json<MessageResponse>>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    let use_case = DeleteWorkoutUseCase::new(state.repo.clone(), state.events.clone());
    use_case.execute(caller.user_id, &id).await?;

    Ok(Json(MessageResponse {
        message: "Workout deleted successfully",
    }))
}

/// GET /api/workouts/stats/summary
pub async fn stats<R, P>(
    State(state): State<WorkoutAppState<R, P>>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> WorkoutResult<Json<StatsResponse>>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    let use_case = WorkoutStatsUseCase::new(state.repo.clone());
    let stats = use_case.execute(&caller.user_id).await?;

    Ok(Json(StatsResponse { stats }))
}

/// GET /api/workouts/stats/insights
pub async fn insights<R, P>(
    State(state): State<WorkoutAppState<R, P>>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> WorkoutResult<Json<TrainingInsights>>
where
    R: WorkoutRepository + Clone + Send + Sync + 'static,
    P: WorkoutEventPublisher + Clone + Send + Sync + 'static,
{
    let use_case = TrainingInsightsUseCase::new(state.repo.clone(), state.config.clone());
    Ok(Json(use_case.execute(&caller.user_id).await?))
}

fn reject_body(rejection: JsonRejection) -> WorkoutError {
    tracing::debug!(error = %rejection, "Rejected workout request body");
    WorkoutError::Validation("Invalid request body".to_string())
}
