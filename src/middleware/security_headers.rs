//! Security headers middleware
//!
//! Applies standard HTTP security headers (X-Content-Type-Options,
//! X-Frame-Options, etc.) using `tower_http::set_header::SetResponseHeaderLayer`.
//! HSTS is omitted; the service terminates plain HTTP behind its ingress.

use axum::http::HeaderValue;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Apply the response security headers to the router
pub fn apply_security_headers(app: Router) -> Router {
    app
        // X-Content-Type-Options: nosniff
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        // X-Frame-Options: DENY
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        // X-XSS-Protection: 0 (modern recommendation: disable the browser XSS filter)
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_XSS_PROTECTION,
            HeaderValue::from_static("0"),
        ))
        // Referrer-Policy
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}
