//! Health and metrics endpoints

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{SecondsFormat, Utc};

use crate::{models::HealthResponse, state::AppState};

/// Content type of the Prometheus text exposition format
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Liveness probe.
///
/// Always answers 200, deliberately without touching the store: liveness is
/// "the process runs", readiness is a different question.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime_secs(),
    })
}

/// Scrape endpoint: current registry snapshot in text exposition format
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROMETHEUS_CONTENT_TYPE),
        )],
        body,
    )
}
