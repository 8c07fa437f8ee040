//! Request metrics middleware
//!
//! Times every request and records it in the shared [`MetricsCollector`].
//! The response passes through unchanged.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::metrics::MetricsCollector;

/// Responses slower than this are logged at warn
const SLOW_REQUEST_MS: u128 = 1000;

pub async fn record_metrics(
    State(metrics): State<Arc<MetricsCollector>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let elapsed = started.elapsed();
    let status = response.status().as_u16();
    metrics.record(&path, &method, status, elapsed).await;

    if elapsed.as_millis() >= SLOW_REQUEST_MS {
        tracing::warn!(%method, %path, status, elapsed_ms = elapsed.as_millis() as u64, "Slow request");
    } else {
        tracing::debug!(%method, %path, status, elapsed_ms = elapsed.as_millis() as u64, "Request completed");
    }

    response
}
