//! Operational endpoints: banner, health, metrics, fallback

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use platform::metrics::{MetricsCollector, MetricsSummary, RequestSample};
use serde::Serialize;
use serde_json::{Value, json};

/// Number of samples returned by `/api/metrics`
pub const RECENT_SAMPLES: usize = 20;

#[derive(Clone)]
pub struct OpsState {
    pub metrics: Arc<MetricsCollector>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub summary: MetricsSummary,
    pub recent: Vec<RequestSample>,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "MMA Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth",
            "workouts": "/api/workouts",
            "realtime": "/api/realtime",
            "health": "/api/health",
            "metrics": "/api/metrics"
        }
    }))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "MMA Tracker API is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// GET /api/metrics
pub async fn metrics(State(state): State<OpsState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        summary: state.metrics.summary().await,
        recent: state.metrics.recent(RECENT_SAMPLES).await,
    })
}

/// Any unmatched route
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Resource not found" })),
    )
}
