//! Cross-cutting middleware applied to every request

pub mod metrics;
pub mod security_headers;

pub use metrics::track_metrics;
pub use security_headers::apply_security_headers;
