//! Per-request metrics capture
//!
//! Wraps every handler and records elapsed wall-clock time and the final
//! status code under `{method, route, status_code}`. The `route` label is the
//! matched route pattern (`/api/users/{id}`), not the literal path, so
//! per-user paths do not explode the label cardinality. Unmatched requests
//! fall back to the literal path.
//!
//! Emits `http_requests_total` (monotonic counter) and
//! `http_request_duration_seconds` (histogram) with identical label sets.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Counter of completed requests
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Histogram of request durations in seconds
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Record count and duration for one request
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let method = req.method().to_string();

    let response = next.run(req).await;

    let elapsed = start.elapsed().as_secs_f64();
    let labels = [
        ("method", method),
        ("route", route),
        ("status_code", response.status().as_u16().to_string()),
    ];

    metrics::counter!(HTTP_REQUESTS_TOTAL, &labels).increment(1);
    metrics::histogram!(HTTP_REQUEST_DURATION_SECONDS, &labels).record(elapsed);

    response
}
